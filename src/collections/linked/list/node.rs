use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

/// A copyable handle to a boxed [`Node`]. Nodes are allocated with [`Box`] so that taking one
/// back out of the list moves its value off the heap with a plain dereference.
///
/// The accessors hand out references with an unbounded lifetime. Every caller ties them back to a
/// borrow of the list that owns the node, which is the only place a NodeRef is stored.
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

impl<T> NodeRef<T> {
    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    pub fn new(value: T, prev: Link<T>, next: Link<T>) -> NodeRef<T> {
        NodeRef::from_node(Node { value, prev, next })
    }

    /// Frees the node, returning its contents. The caller must make sure that nothing links to it
    /// any more.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created by Box::leak in from_node and each node is only ever
        // taken once, when it is unlinked.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is live for as long as the owning list keeps it linked.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: As above, and the list hands these out only through &mut self.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub const fn prev(&self) -> Link<T> {
        // SAFETY: The node is live for as long as the owning list keeps it linked.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub const fn next(&self) -> Link<T> {
        // SAFETY: The node is live for as long as the owning list keeps it linked.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_prev(&self, prev: Link<T>) {
        // SAFETY: The node is live and no reference to its links outlives this write.
        unsafe { (*self.0.as_ptr()).prev = prev }
    }

    pub fn set_next(&self, next: Link<T>) {
        // SAFETY: The node is live and no reference to its links outlives this write.
        unsafe { (*self.0.as_ptr()).next = next }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodeRef<T> {}
