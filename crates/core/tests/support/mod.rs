//! Shared test helpers for `flagdesk-core` integration tests.
//!
//! Recording mocks for both ports so tests can assert which collaborator
//! calls happened, in which order, with which arguments.

#![allow(dead_code)]

pub mod flags;
pub mod privileges;

use flagdesk_domain::{Caller, Uid};

pub const MODERATOR: Caller = Caller::new(Uid(1));
pub const OTHER_MODERATOR: Caller = Caller::new(Uid(2));
pub const MEMBER: Caller = Caller::new(Uid(10));
