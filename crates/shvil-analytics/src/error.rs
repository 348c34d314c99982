// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the analytics SDK.

use thiserror::Error;

/// Analytics SDK errors.
///
/// Normalization itself is total and cannot fail; errors only arise at the
/// delivery boundary.
#[derive(Debug, Error)]
pub enum AnalyticsError {
	/// The sink failed to deliver an event.
	#[error("event delivery failed: {0}")]
	Delivery(String),

	/// Client has been shut down.
	#[error("client has been shut down")]
	ClientShutdown,
}

/// Result type alias for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_delivery_error_message() {
		let err = AnalyticsError::Delivery("connection refused".to_string());
		assert_eq!(err.to_string(), "event delivery failed: connection refused");
	}

	#[test]
	fn test_shutdown_error_message() {
		assert_eq!(
			AnalyticsError::ClientShutdown.to_string(),
			"client has been shut down"
		);
	}
}
