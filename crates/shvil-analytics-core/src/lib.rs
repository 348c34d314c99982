// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core identity and analytics event types for Shvil.
//!
//! This crate provides the data model shared by the Shvil client SDK
//! (`shvil-analytics`): user identities with a guest fallback, raw events
//! with heterogeneously-typed properties, the persisted event-log record,
//! and the canonical wire event for the Supabase event store.
//!
//! All values are immutable once constructed; construction never fails.
//!
//! # Example
//!
//! ```
//! use shvil_analytics_core::{AnalyticsEvent, User};
//!
//! let guest = User::guest();
//! assert!(guest.is_guest);
//! assert_eq!(guest.display_name_or_email(), "Guest");
//!
//! let event = AnalyticsEvent::new("tap_button")
//! 	.with_property("count", 3)
//! 	.with_property("label", "ok");
//! assert_eq!(event.properties.coerce()["count"], "3");
//! ```

pub mod event;
pub mod properties;
pub mod session;
pub mod supabase;
pub mod user;

pub use event::{AnalyticsEvent, Event, EventId};
pub use properties::{Properties, PropertyValue};
pub use session::SessionId;
pub use supabase::{SupabaseAnalyticsEvent, PLATFORM};
pub use user::{User, UserId, GUEST_DISPLAY_NAME, GUEST_EMAIL};
