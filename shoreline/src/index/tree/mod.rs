mod sphere_tree;
mod tree_entry;
mod tree_node;

#[doc(inline)]
pub use sphere_tree::SphereTree;
#[doc(inline)]
pub use tree_entry::EntryShape;
#[doc(inline)]
pub use tree_entry::QueryProbe;
#[doc(inline)]
pub use tree_entry::TreeEntry;
#[doc(inline)]
pub use tree_node::NodeContent;
#[doc(inline)]
pub use tree_node::TreeNode;
