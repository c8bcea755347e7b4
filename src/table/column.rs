/// How one record field is labelled, searched and displayed.
pub struct Column<T> {
    /// Field name, used for sorting diagnostics and log lines.
    pub key: &'static str,
    pub header: &'static str,
    /// Raw value used for filtering and sorting.
    pub value: fn(&T) -> String,
    /// Display override; falls back to `value` when absent.
    pub render: Option<fn(&T) -> String>,
}

impl<T> Column<T> {
    pub fn new(key: &'static str, header: &'static str, value: fn(&T) -> String) -> Self {
        Self {
            key,
            header,
            value,
            render: None,
        }
    }

    pub fn with_render(mut self, render: fn(&T) -> String) -> Self {
        self.render = Some(render);
        self
    }

    pub fn cell(&self, record: &T) -> String {
        match self.render {
            Some(render) => render(record),
            None => (self.value)(record),
        }
    }

    /// Case-insensitive substring match on the raw value. `needle` must already be lowercase.
    pub fn matches(&self, record: &T, needle: &str) -> bool {
        (self.value)(record).to_lowercase().contains(needle)
    }
}

// Manual impl: fn pointers are Clone regardless of `T`.
impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header,
            value: self.value,
            render: self.render,
        }
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("render", &self.render.is_some())
            .finish()
    }
}
