const DOI_MARKER: &str = "DOI";
const DOI_RESOLVER: &str = "http://dx.doi.org/";
const DISABLED_HREF: &str = "#!";

/// A label split on its `DOI` marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelParts {
	/// Text shown in the list entry.
	pub text: String,
	/// Trimmed identifier after the marker, if any.
	pub doi: Option<String>,
}

/// Attributes of the DOI anchor in a list entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkAttrs {
	/// Resolver URL, or `#!` when disabled.
	pub href: String,
	/// `_blank` for active links only.
	pub target: Option<&'static str>,
	/// CSS class; disabled links carry `disabled`.
	pub class: &'static str,
}

impl LabelParts {
	/// Text before the first marker is displayed; the segment after it is the DOI.
	pub fn split(label: &str) -> Self {
		let mut parts = label.split(DOI_MARKER);
		let text = parts.next().unwrap_or_default().to_string();
		let doi = parts
			.next()
			.map(str::trim)
			.filter(|doi| !doi.is_empty())
			.map(str::to_string);
		Self { text, doi }
	}

	/// Resolver URL, or `None` when the link must render disabled.
	pub fn href(&self) -> Option<String> {
		self.doi.as_ref().map(|doi| format!("{DOI_RESOLVER}{doi}"))
	}

	/// Anchor attributes: active links open the resolver in a new tab.
	pub fn link_attrs(&self) -> LinkAttrs {
		match self.href() {
			Some(href) => LinkAttrs {
				href,
				target: Some("_blank"),
				class: "right",
			},
			None => LinkAttrs {
				href: DISABLED_HREF.into(),
				target: None,
				class: "right disabled",
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_title_and_doi() {
		let parts = LabelParts::split("Paper Title DOI10.1000/xyz");
		assert_eq!(parts.text, "Paper Title ");
		assert_eq!(parts.href().as_deref(), Some("http://dx.doi.org/10.1000/xyz"));
	}

	#[test]
	fn trims_doi() {
		let parts = LabelParts::split("B DOI  abc \n");
		assert_eq!(parts.href().as_deref(), Some("http://dx.doi.org/abc"));
	}

	#[test]
	fn no_marker_disables_link() {
		let parts = LabelParts::split("Just a title");
		assert_eq!(parts.text, "Just a title");
		assert_eq!(parts.href(), None);
	}

	#[test]
	fn empty_doi_disables_link() {
		assert_eq!(LabelParts::split("Title DOI   ").href(), None);
	}

	#[test]
	fn link_attrs_for_active_and_disabled() {
		let cases = [
			(
				"Paper DOI10.1/x",
				LinkAttrs {
					href: "http://dx.doi.org/10.1/x".into(),
					target: Some("_blank"),
					class: "right",
				},
			),
			(
				"Paper",
				LinkAttrs {
					href: "#!".into(),
					target: None,
					class: "right disabled",
				},
			),
			(
				"Paper DOI ",
				LinkAttrs {
					href: "#!".into(),
					target: None,
					class: "right disabled",
				},
			),
		];
		for (label, expected) in cases {
			assert_eq!(LabelParts::split(label).link_attrs(), expected, "{label}");
		}
	}

	#[test]
	fn only_first_segment_after_marker_is_used() {
		let parts = LabelParts::split("T DOI a DOI b");
		assert_eq!(parts.doi.as_deref(), Some("a"));
	}
}
