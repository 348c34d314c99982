// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client analytics SDK core for Shvil.
//!
//! Raw application events carry heterogeneously-typed properties; before
//! anything reaches the backend event store they are normalized into the
//! canonical, string-valued wire form defined in `shvil-analytics-core`.
//! This crate provides that normalizer, the collaborator traits it reads
//! from, the transport boundary it hands events to, and a client facade
//! that keeps track of the current identity and session.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use shvil_analytics::{BuildMetadata, Normalizer};
//! use shvil_analytics_core::{AnalyticsEvent, SessionId};
//!
//! let normalizer = Normalizer::new(Arc::new(BuildMetadata));
//! let event = AnalyticsEvent::new("route_started")
//! 	.with_property("mode", "walking")
//! 	.with_property("stops", 3);
//!
//! let session = SessionId::new();
//! let canonical = normalizer.normalize(&event, Some(&session));
//! assert_eq!(canonical.properties["stops"], "3");
//! assert_eq!(canonical.platform, "iOS");
//! ```

pub mod client;
pub mod error;
pub mod metadata;
pub mod normalize;
pub mod sink;

pub use client::AnalyticsClient;
pub use error::{AnalyticsError, Result};
pub use metadata::{AppMetadata, BuildMetadata};
pub use normalize::Normalizer;
pub use sink::EventSink;
