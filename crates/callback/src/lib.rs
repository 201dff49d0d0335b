//! Callbacks over a target object's method.
//!
//! A callback binds a borrowed object, one of its `&self` methods and zero or
//! more create-time arguments. Running it supplies the remaining exec-time
//! arguments; the method sees the bound arguments first.
//!
//! ```text
//! let mut cb = new_callback_1_2(&server, Server::on_frame, universe);
//! cb.run(frame, now);             // server.on_frame(universe, frame, now)
//! let once = new_single_callback_0_1(&server, Server::on_close);
//! once.run(reason);               // consumed
//! ```
//!
//! The items are generated at build time by the `generator` crate from the
//! default arity table: exec-time counts 1 to 4, with up to three bound
//! arguments for one exec-time argument and at most one otherwise.
//!
//! Targets are borrowed shared, so only `&self` methods can be bound. A
//! method that mutates its target keeps that state in a `Cell` or `RefCell`,
//! or behind a lock when the target is shared across threads.

include!(concat!(env!("OUT_DIR"), "/callback.rs"));

pub use self::callback::*;
