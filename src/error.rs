//! Errors raised while loading the dataset and mounting the page.

use thiserror::Error;

/// Everything that can stop the tree view from rendering.
#[derive(Error, Debug)]
pub enum TreeError {
	/// The request never produced a response.
	#[error("Request to {url} failed: {source}")]
	Fetch {
		/// Dataset URL.
		url: String,
		/// Transport error reported by the browser.
		source: gloo_net::Error,
	},

	/// The server answered with a non-success status.
	#[error("Server answered {status} for {url}")]
	Status {
		/// Dataset URL.
		url: String,
		/// HTTP status code.
		status: u16,
	},

	/// The body was not a graph description.
	#[error("Malformed graph data: {0}")]
	Decode(String),

	/// A panel the host page should provide is absent.
	#[error("Host element `{0}` not found")]
	MissingHost(String),

	/// Running outside a browser window.
	#[error("No browser window available")]
	NoWindow,
}

impl From<serde_json::Error> for TreeError {
	fn from(err: serde_json::Error) -> Self {
		Self::Decode(err.to_string())
	}
}
