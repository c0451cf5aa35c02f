//! # Hooks
//!
//! Typed extension points for the sitemap pipeline.
//!
//! ## Overview
//!
//! A seam is a named place where outside code can observe or transform a value.
//! Three kinds exist:
//!
//! * [`Filter`]: every callback receives the value returned by the previous one.
//! * [`ShortCircuit`]: the first callback returning `Some` decides the outcome.
//! * [`Action`]: every callback is notified, nothing is returned.
//!
//! ## Features
//!
//! * **Ordered**: callbacks run by ascending [`Priority`], ties in registration order.
//! * **Shared**: seams are `Clone` handles over the same callback list.
//! * **Re-entrant**: callbacks may register new callbacks while a seam is dispatching;
//!   the list is snapshotted before the first callback runs.
//!
//! # Example
//!
//! ```rust
//! use sitemaps_hooks::{Filter, Priority, ShortCircuit};
//!
//! let max_urls: Filter<usize, str> = Filter::new("max_urls");
//! max_urls.add(|max, kind| if kind == "post" { max.min(500) } else { max });
//! assert_eq!(max_urls.apply(2000, "post"), 500);
//! assert_eq!(max_urls.apply(2000, "user"), 2000);
//!
//! let pre: ShortCircuit<u32, str> = ShortCircuit::new("pre_max_num_pages");
//! pre.add_with_priority(Priority::LATE, |_| Some(9));
//! pre.add(|subtype| (subtype == "page").then_some(1));
//! assert_eq!(pre.resolve("page"), Some(1));
//! assert_eq!(pre.resolve("post"), Some(9));
//! ```

mod action;
mod callbacks;
mod filter;

pub use action::Action;
pub use callbacks::{HookId, Priority};
pub use filter::{Filter, ShortCircuit};
