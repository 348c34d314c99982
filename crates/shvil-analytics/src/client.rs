// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client facade tying identity, session, and delivery together.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use shvil_analytics_core::{AnalyticsEvent, Event, SessionId, User};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{AnalyticsError, Result};
use crate::metadata::AppMetadata;
use crate::normalize::Normalizer;
use crate::sink::EventSink;

/// Mutable per-client context: who the user is and which session is open.
#[derive(Debug, Default)]
struct ClientState {
	user: Option<User>,
	session: Option<SessionId>,
}

/// The analytics client facade.
///
/// Holds the current identity and session, normalizes raw events, and
/// hands the canonical form to the configured sink. The user reference is
/// retained here, not passed to the normalizer; it is stamped onto the
/// sibling [`Event`] log record instead.
pub struct AnalyticsClient {
	sink: Arc<dyn EventSink>,
	metadata: Arc<dyn AppMetadata>,
	normalizer: Normalizer,
	state: RwLock<ClientState>,
	shutdown: AtomicBool,
}

impl AnalyticsClient {
	/// Creates a client with the given sink and app-metadata collaborator.
	pub fn new(sink: Arc<dyn EventSink>, metadata: Arc<dyn AppMetadata>) -> Self {
		Self {
			sink,
			normalizer: Normalizer::new(metadata.clone()),
			metadata,
			state: RwLock::new(ClientState::default()),
			shutdown: AtomicBool::new(false),
		}
	}

	/// Sets the current user identity.
	pub async fn identify(&self, user: User) {
		debug!(user_id = %user.id, is_guest = user.is_guest, "Identified user");
		self.state.write().await.user = Some(user);
	}

	/// Switches to a fresh guest identity and returns it.
	pub async fn identify_guest(&self) -> User {
		let guest = User::guest();
		self.identify(guest.clone()).await;
		guest
	}

	/// Clears the current identity and session.
	pub async fn reset(&self) {
		let mut state = self.state.write().await;
		state.user = None;
		state.session = None;
	}

	/// The current identity, if one has been set.
	pub async fn current_user(&self) -> Option<User> {
		self.state.read().await.user.clone()
	}

	/// Opens a new session and returns its id.
	pub async fn start_session(&self) -> SessionId {
		let session = SessionId::new();
		debug!(session_id = %session, "Started analytics session");
		self.state.write().await.session = Some(session.clone());
		session
	}

	/// Closes the current session.
	pub async fn end_session(&self) {
		self.state.write().await.session = None;
	}

	/// The id of the open session, if any.
	pub async fn current_session(&self) -> Option<SessionId> {
		self.state.read().await.session.clone()
	}

	/// Signals that no further events should be accepted.
	pub fn shutdown(&self) {
		self.shutdown.store(true, Ordering::SeqCst);
	}

	/// Normalizes `event` under the current session and delivers it.
	///
	/// Normalization itself cannot fail; delivery failures are logged and
	/// propagated to the caller.
	pub async fn track(&self, event: AnalyticsEvent) -> Result<()> {
		if self.shutdown.load(Ordering::SeqCst) {
			return Err(AnalyticsError::ClientShutdown);
		}

		let session = self.current_session().await;
		let canonical = self.normalizer.normalize(&event, session.as_ref());

		if let Err(e) = self.sink.deliver(&canonical).await {
			warn!(
				event_name = %canonical.event_name,
				error = %e,
				"Failed to deliver analytics event"
			);
			return Err(e);
		}

		Ok(())
	}

	/// Builds the persisted event-log record for `event`.
	///
	/// The record carries the same coerced properties as the canonical
	/// form, plus the current user reference by id. The app version is
	/// read from the collaborator once per call.
	pub async fn record(&self, event: AnalyticsEvent) -> Event {
		let state = self.state.read().await;
		let mut record = Event::new(event.name)
			.with_properties(event.properties.coerce())
			.with_timestamp(event.timestamp);

		if let Some(user) = &state.user {
			record = record.with_user(user.id);
		}
		if let Some(session) = &state.session {
			record = record.with_session(session.clone());
		}
		if let Some(version) = self.metadata.current_app_version() {
			record = record.with_app_version(version);
		}
		record
	}
}
