//! The classic interview algorithms: searching, two pointers, sliding windows,
//! stack based bracket matching and the textbook sorts.\
//! Every function here is pure (in-place sorts aside) and independent from the others.

pub mod search;
pub mod two_pointers;
pub mod sliding_window;
pub mod brackets;
pub mod sorting;
