// Keyed cache for values that may only be built once per key, such as the
// WebAudio source node of a media element. Pure, so host tests can include it.

/// Linear-scan cache; the key type only needs an identity test, not `Hash`.
#[derive(Debug)]
pub struct OnceCache<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for OnceCache<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K, V> OnceCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value whose key satisfies `same`, or a newly built one stored
    /// under `key`. A failed build stores nothing, so the next call retries.
    pub fn get_or_try_insert<E>(
        &mut self,
        key: K,
        same: impl Fn(&K, &K) -> bool,
        build: impl FnOnce(&K) -> Result<V, E>,
    ) -> Result<&V, E> {
        if let Some(i) = self.entries.iter().position(|(k, _)| same(k, &key)) {
            return Ok(&self.entries[i].1);
        }
        let value = build(&key)?;
        self.entries.push((key, value));
        let last = self.entries.len() - 1;
        Ok(&self.entries[last].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
