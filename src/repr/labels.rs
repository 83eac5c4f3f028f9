use fxhash::FxHashMap;

use super::*;

/// Bookkeeping of the bijection `index <-> label` and `index <-> id`.
///
/// Labels are unique within a graph. Ids are handed out from a counter and never reused.
#[derive(Debug, Clone, Default)]
pub struct VertexLabels {
    labels: Vec<String>,
    ids: Vec<VertexId>,
    by_label: FxHashMap<String, Node>,
    by_id: FxHashMap<VertexId, Node>,
    next_id: u64,
}

impl VertexLabels {
    /// Creates an empty label store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns *true* if no vertex is stored
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Appends a vertex and returns its index
    ///
    /// # Errors
    /// Returns `GraphError::DuplicateVertex` if the label is already in use.
    pub fn insert(&mut self, label: String) -> Result<Node> {
        if self.by_label.contains_key(&label) {
            return Err(GraphError::DuplicateVertex(label));
        }

        let index = self.labels.len() as Node;
        let id = VertexId::new(self.next_id);
        self.next_id += 1;

        self.by_label.insert(label.clone(), index);
        self.by_id.insert(id, index);
        self.labels.push(label);
        self.ids.push(id);

        Ok(index)
    }

    /// Removes the vertex at index `u`, re-indexes all later vertices and returns the label
    /// ** Panics if `u >= n` **
    pub fn remove(&mut self, u: Node) -> String {
        let label = self.labels.remove(u as usize);
        let id = self.ids.remove(u as usize);
        self.by_label.remove(&label);
        self.by_id.remove(&id);

        for (index, (label, id)) in self.labels.iter().zip(&self.ids).enumerate().skip(u as usize) {
            let index = index as Node;
            self.by_label.insert(label.clone(), index);
            self.by_id.insert(*id, index);
        }

        label
    }

    /// Returns the label of the vertex at index `u`
    pub fn label_of(&self, u: Node) -> Option<&str> {
        self.labels.get(u as usize).map(String::as_str)
    }

    /// Returns the index of the vertex labelled `label`
    pub fn index_of_label(&self, label: &str) -> Option<Node> {
        self.by_label.get(label).copied()
    }

    /// Returns the id of the vertex at index `u`
    pub fn id_of(&self, u: Node) -> Option<VertexId> {
        self.ids.get(u as usize).copied()
    }

    /// Returns the index of the vertex with id `id`
    pub fn index_of_id(&self, id: VertexId) -> Option<Node> {
        self.by_id.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reindex_after_remove() {
        let mut labels = VertexLabels::new();
        for l in ["a", "b", "c", "d"] {
            labels.insert(l.to_string()).unwrap();
        }
        assert!(matches!(
            labels.insert("c".to_string()),
            Err(GraphError::DuplicateVertex(_))
        ));

        let id_d = labels.id_of(3).unwrap();
        assert_eq!(labels.remove(1), "b");

        assert_eq!(labels.len(), 3);
        assert_eq!(labels.label_of(1), Some("c"));
        assert_eq!(labels.index_of_label("d"), Some(2));
        assert_eq!(labels.index_of_label("b"), None);
        assert_eq!(labels.index_of_id(id_d), Some(2));

        // ids are not reused
        let e = labels.insert("e".to_string()).unwrap();
        assert_eq!(e, 3);
        assert!(labels.id_of(3).unwrap() > id_d);
    }
}
