//! Generic query client for the backend's REST interface.
//!
//! DESIGN
//! ======
//! Every screen talks to the backend through the same small surface: a
//! `select` (optionally counted), an `insert`, or an `update`, narrowed by
//! `eq`/`in` filters and shaped by `order`/`limit`, scoped to a table name.
//! `Query` builds the request as plain data so the wire shape is unit
//! testable; only the final send touches the browser (`hydrate` builds).
//!
//! No retry, timeout, or cancellation exists here: completion or failure is
//! dictated entirely by the backend call's own settlement.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Path prefix for table-scoped requests.
pub const REST_BASE: &str = "/rest/v1";

#[derive(Clone, Debug, PartialEq)]
enum Verb {
    Select { columns: String, counted: bool },
    Insert(serde_json::Value),
    Update(serde_json::Value),
}

#[derive(Clone, Debug, PartialEq)]
enum Filter {
    Eq { column: String, value: String },
    In { column: String, values: Vec<String> },
}

impl Filter {
    /// Render as a `column=op.value` query-string pair.
    ///
    /// Filter values are backend tokens (UUIDs, enum strings), so no
    /// escaping layer sits between here and the wire.
    fn render(&self) -> String {
        match self {
            Self::Eq { column, value } => format!("{column}=eq.{value}"),
            Self::In { column, values } => {
                format!("{column}=in.({})", values.join(","))
            }
        }
    }
}

/// One backend request: a table, a verb, and its narrowing clauses.
#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    table: String,
    verb: Verb,
    filters: Vec<Filter>,
    order: Option<(String, bool)>,
    limit: Option<u32>,
}

impl Query {
    /// Read rows from `table`, projecting `columns` (`"*"` for all).
    pub fn select(table: &str, columns: &str) -> Self {
        Self {
            table: table.to_owned(),
            verb: Verb::Select {
                columns: columns.to_owned(),
                counted: false,
            },
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Insert one row into `table`.
    pub fn insert(table: &str, row: serde_json::Value) -> Self {
        Self {
            table: table.to_owned(),
            verb: Verb::Insert(row),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Update rows in `table` matching the attached filters.
    pub fn update(table: &str, changes: serde_json::Value) -> Self {
        Self {
            table: table.to_owned(),
            verb: Verb::Update(changes),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Ask the backend for an exact row count alongside the rows.
    #[must_use]
    pub fn counted(mut self) -> Self {
        if let Verb::Select { counted, .. } = &mut self.verb {
            *counted = true;
        }
        self
    }

    /// Keep rows where `column` equals `value`.
    #[must_use]
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push(Filter::Eq {
            column: column.to_owned(),
            value: value.to_owned(),
        });
        self
    }

    /// Keep rows where `column` is any of `values`.
    #[must_use]
    pub fn in_list(mut self, column: &str, values: &[&str]) -> Self {
        self.filters.push(Filter::In {
            column: column.to_owned(),
            values: values.iter().map(|v| (*v).to_owned()).collect(),
        });
        self
    }

    /// Sort newest-first on `column`.
    #[must_use]
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some((column.to_owned(), true));
        self
    }

    /// Sort oldest-first on `column`.
    #[must_use]
    pub fn order_asc(mut self, column: &str) -> Self {
        self.order = Some((column.to_owned(), false));
        self
    }

    /// Cap the number of returned rows.
    #[must_use]
    pub fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    /// HTTP method for this query.
    pub fn method(&self) -> &'static str {
        match self.verb {
            Verb::Select { .. } => "GET",
            Verb::Insert(_) => "POST",
            Verb::Update(_) => "PATCH",
        }
    }

    /// Request target: path plus rendered query string.
    pub fn path(&self) -> String {
        let mut params = Vec::new();
        if let Verb::Select { columns, .. } = &self.verb {
            params.push(format!("select={columns}"));
        }
        for filter in &self.filters {
            params.push(filter.render());
        }
        if let Some((column, desc)) = &self.order {
            let dir = if *desc { "desc" } else { "asc" };
            params.push(format!("order={column}.{dir}"));
        }
        if let Some(n) = self.limit {
            params.push(format!("limit={n}"));
        }

        let base = format!("{REST_BASE}/{}", self.table);
        if params.is_empty() {
            base
        } else {
            format!("{base}?{}", params.join("&"))
        }
    }

    /// `Prefer` header value, if this query needs one.
    pub fn prefer(&self) -> Option<&'static str> {
        match &self.verb {
            Verb::Select { counted: true, .. } => Some("count=exact"),
            Verb::Select { counted: false, .. } => None,
            Verb::Insert(_) | Verb::Update(_) => Some("return=minimal"),
        }
    }

    /// Serialized JSON body for writes; `None` for reads.
    pub fn body(&self) -> Option<String> {
        match &self.verb {
            Verb::Select { .. } => None,
            Verb::Insert(row) => Some(row.to_string()),
            Verb::Update(changes) => Some(changes.to_string()),
        }
    }
}

/// A settled read: the rows plus the exact total when the query was counted.
#[derive(Clone, Debug, PartialEq)]
pub struct Rows<T> {
    pub rows: Vec<T>,
    pub count: Option<u64>,
}

/// Extract the error text the backend reported for a failed request.
///
/// The backend wraps failures as `{"message": "..."}`; that message is what
/// modals surface verbatim. Anything else degrades to a status line.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            if !message.is_empty() {
                return message.to_owned();
            }
        }
    }
    format!("request failed: {status}")
}

/// Parse the total from a `Content-Range` header (`0-24/3573` or `*/0`).
pub(crate) fn content_range_total(header: &str) -> Option<u64> {
    let total = header.rsplit('/').next()?;
    total.parse().ok()
}

/// Run a read and deserialize the returned rows.
///
/// # Errors
///
/// Returns the backend-reported message on a non-success response, or a
/// transport/deserialization description.
pub async fn fetch<T: serde::de::DeserializeOwned>(query: &Query) -> Result<Rows<T>, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::get(&query.path());
        if let Some(prefer) = query.prefer() {
            request = request.header("Prefer", prefer);
        }
        let resp = request.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_message(resp.status(), &body));
        }
        let count = resp
            .headers()
            .get("content-range")
            .and_then(|h| content_range_total(&h));
        let rows: Vec<T> = resp.json().await.map_err(|e| e.to_string())?;
        Ok(Rows { rows, count })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

/// Run a write (insert or update), discarding the returned representation.
///
/// # Errors
///
/// Returns the backend-reported message on a non-success response.
pub async fn execute(query: &Query) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let builder = match query.method() {
            "POST" => gloo_net::http::Request::post(&query.path()),
            _ => gloo_net::http::Request::patch(&query.path()),
        };
        let mut builder = builder.header("Content-Type", "application/json");
        if let Some(prefer) = query.prefer() {
            builder = builder.header("Prefer", prefer);
        }
        let body = query.body().unwrap_or_default();
        let request = builder.body(body).map_err(|e| e.to_string())?;
        let resp = request.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(error_message(resp.status(), &text));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}
