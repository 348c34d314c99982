// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Transport boundary for delivering canonical events.

use shvil_analytics_core::SupabaseAnalyticsEvent;

use crate::error::Result;

/// Consumer of normalized events.
///
/// The sink owns delivery entirely: batching, retries, and backend
/// persistence are its business. This core hands events over and assumes
/// nothing about delivery success.
#[async_trait::async_trait]
pub trait EventSink: Send + Sync {
	/// Accepts a canonical event for delivery.
	async fn deliver(&self, event: &SupabaseAnalyticsEvent) -> Result<()>;
}
