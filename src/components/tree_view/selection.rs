use super::types::NodeKey;

/// Selected nodes, newest first.
///
/// This is the single source of truth for both the selected-list panel and
/// the selected fill of each circle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
	keys: Vec<NodeKey>,
}

impl Selection {
	/// Whether `key` is selected.
	pub fn contains(&self, key: &NodeKey) -> bool {
		self.keys.contains(key)
	}

	/// Flips membership of `key`; returns whether it is now selected.
	pub fn toggle(&mut self, key: NodeKey) -> bool {
		if self.remove(&key) {
			false
		} else {
			self.keys.insert(0, key);
			true
		}
	}

	/// Drops `key`; returns whether it was selected.
	pub fn remove(&mut self, key: &NodeKey) -> bool {
		let before = self.keys.len();
		self.keys.retain(|k| k != key);
		self.keys.len() != before
	}

	/// Selected keys, newest first.
	pub fn iter(&self) -> impl Iterator<Item = &NodeKey> {
		self.keys.iter()
	}

	/// Number of selected nodes.
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	/// Nothing is selected.
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const A: NodeKey = NodeKey { id: 0, ri: 1 };
	const B: NodeKey = NodeKey { id: 1, ri: 1 };

	#[test]
	fn toggle_adds_then_removes() {
		let mut sel = Selection::default();
		assert!(sel.toggle(A));
		assert!(sel.contains(&A));
		assert_eq!(sel.len(), 1);
		assert!(!sel.toggle(A));
		assert!(sel.is_empty());
	}

	#[test]
	fn even_clicks_restore_state() {
		let mut sel = Selection::default();
		sel.toggle(B);
		let start = sel.clone();
		for _ in 0..6 {
			sel.toggle(A);
		}
		assert_eq!(sel, start);
	}

	#[test]
	fn newest_first() {
		let mut sel = Selection::default();
		sel.toggle(A);
		sel.toggle(B);
		assert_eq!(sel.iter().copied().collect::<Vec<_>>(), vec![B, A]);
	}

	#[test]
	fn quit_matches_reclick() {
		let mut clicked = Selection::default();
		let mut quit = Selection::default();
		clicked.toggle(A);
		quit.toggle(A);

		clicked.toggle(A);
		assert!(quit.remove(&A));
		assert_eq!(clicked, quit);
		assert!(!quit.remove(&A));
	}
}
