pub use reqwest::Method;

/// One HTTP exchange as the client describes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// An ARM path (`/subscriptions/...`) resolved against the endpoint, or an
    /// absolute URL such as a `nextLink`, used as is.
    pub path_or_url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    /// JSON body bytes.
    pub body: Option<Vec<u8>>,
    /// Statuses the caller accepts; empty means any 2xx.
    pub expected_status: Vec<u16>,
}

impl Request {
    pub fn new(method: Method, path_or_url: impl Into<String>) -> Self {
        Self {
            method,
            path_or_url: path_or_url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            expected_status: Vec::new(),
        }
    }

    pub fn get(path_or_url: impl Into<String>) -> Self {
        Self::new(Method::GET, path_or_url)
    }

    pub fn put(path_or_url: impl Into<String>) -> Self {
        Self::new(Method::PUT, path_or_url)
    }

    pub fn delete(path_or_url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path_or_url)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add `name` only when a value is given; used for conditional headers.
    pub fn optional_header(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.header(name, v),
            None => self,
        }
    }

    pub fn json_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn expect(mut self, statuses: &[u16]) -> Self {
        self.expected_status = statuses.to_vec();
        self
    }

    pub fn is_absolute(&self) -> bool {
        self.path_or_url.starts_with("https://") || self.path_or_url.starts_with("http://")
    }

    /// First header named `name`, compared case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self { status, headers: Vec::new(), body: body.into() }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
}
