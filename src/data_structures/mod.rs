//! Simple, owned data structures.

pub mod linked_list;
