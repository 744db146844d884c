use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusCategory {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl StatusCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::Informational => "informational",
            StatusCategory::Success => "success",
            StatusCategory::Redirection => "redirection",
            StatusCategory::ClientError => "client-error",
            StatusCategory::ServerError => "server-error",
        }
    }

    pub fn from_name(name: &str) -> Option<StatusCategory> {
        match name.trim().to_lowercase().as_str() {
            "informational" => Some(StatusCategory::Informational),
            "success" => Some(StatusCategory::Success),
            "redirection" => Some(StatusCategory::Redirection),
            "client-error" => Some(StatusCategory::ClientError),
            "server-error" => Some(StatusCategory::ServerError),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct StatusEntry {
    pub code: u16,
    pub reason: &'static str,
    pub description: &'static str,
    pub category: StatusCategory,
}

macro_rules! entry {
    ($code:expr, $reason:expr, $description:expr, $category:ident) => {
        StatusEntry {
            code: $code,
            reason: $reason,
            description: $description,
            category: StatusCategory::$category,
        }
    };
}

pub const STATUS_TABLE: &[StatusEntry] = &[
    entry!(100, "Continue", "The server has received the request headers and the client should proceed to send the request body.", Informational),
    entry!(101, "Switching Protocols", "The requester has asked the server to switch protocols and the server has agreed to do so.", Informational),
    entry!(102, "Processing", "The server has received and is processing the request, but no response is available yet.", Informational),
    entry!(200, "OK", "The request has succeeded. The meaning of the success depends on the HTTP method.", Success),
    entry!(201, "Created", "The request has been fulfilled and resulted in a new resource being created.", Success),
    entry!(202, "Accepted", "The request has been accepted for processing, but the processing has not been completed.", Success),
    entry!(204, "No Content", "The server successfully processed the request and is not returning any content.", Success),
    entry!(206, "Partial Content", "The server is delivering only part of the resource due to a range header sent by the client.", Success),
    entry!(300, "Multiple Choices", "Indicates multiple options for the resource from which the client may choose.", Redirection),
    entry!(301, "Moved Permanently", "This and all future requests should be directed to the given URI.", Redirection),
    entry!(302, "Found", "Tells the client to look at another URL. 302 has been superseded by 303 and 307.", Redirection),
    entry!(304, "Not Modified", "Indicates that the resource has not been modified since the version specified by the request headers.", Redirection),
    entry!(307, "Temporary Redirect", "The request should be repeated with another URI; however, future requests should still use the original URI.", Redirection),
    entry!(308, "Permanent Redirect", "The request and all future requests should be repeated using another URI.", Redirection),
    entry!(400, "Bad Request", "The server cannot or will not process the request due to an apparent client error.", ClientError),
    entry!(401, "Unauthorized", "Similar to 403 Forbidden, but specifically for use when authentication is required and has failed or has not yet been provided.", ClientError),
    entry!(403, "Forbidden", "The request was valid, but the server is refusing action. The user might not have the necessary permissions.", ClientError),
    entry!(404, "Not Found", "The requested resource could not be found but may be available in the future.", ClientError),
    entry!(405, "Method Not Allowed", "A request method is not supported for the requested resource.", ClientError),
    entry!(409, "Conflict", "Indicates that the request could not be processed because of conflict in the request.", ClientError),
    entry!(410, "Gone", "Indicates that the resource requested is no longer available and will not be available again.", ClientError),
    entry!(422, "Unprocessable Entity", "The request was well-formed but was unable to be followed due to semantic errors.", ClientError),
    entry!(429, "Too Many Requests", "The user has sent too many requests in a given amount of time.", ClientError),
    entry!(500, "Internal Server Error", "A generic error message, given when an unexpected condition was encountered.", ServerError),
    entry!(501, "Not Implemented", "The server either does not recognize the request method, or it lacks the ability to fulfill the request.", ServerError),
    entry!(502, "Bad Gateway", "The server was acting as a gateway or proxy and received an invalid response from the upstream server.", ServerError),
    entry!(503, "Service Unavailable", "The server is currently unavailable (because it is overloaded or down for maintenance).", ServerError),
    entry!(504, "Gateway Timeout", "The server was acting as a gateway or proxy and did not receive a timely response from the upstream server.", ServerError),
];

pub fn lookup(code: u16) -> Option<&'static StatusEntry> {
    STATUS_TABLE.iter().find(|entry| entry.code == code)
}

pub fn by_category(category: StatusCategory) -> Vec<&'static StatusEntry> {
    STATUS_TABLE
        .iter()
        .filter(|entry| entry.category == category)
        .collect()
}

/// Case-insensitive substring search over code, reason, and description.
pub fn search(term: &str) -> Vec<&'static StatusEntry> {
    let term = term.trim().to_lowercase();
    STATUS_TABLE
        .iter()
        .filter(|entry| {
            entry.code.to_string().contains(&term)
                || entry.reason.to_lowercase().contains(&term)
                || entry.description.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_code() {
        let entry = lookup(404).unwrap();
        assert_eq!(entry.reason, "Not Found");
        assert_eq!(entry.category, StatusCategory::ClientError);
        assert!(lookup(418).is_none());
    }

    #[test]
    fn category_filter() {
        let redirects = by_category(StatusCategory::Redirection);
        assert_eq!(redirects.len(), 6);
        assert!(redirects.iter().all(|e| (300..400).contains(&e.code)));
    }

    #[test]
    fn substring_search() {
        let hits = search("gateway");
        let codes: Vec<u16> = hits.iter().map(|e| e.code).collect();
        assert_eq!(codes, vec![502, 504]);
        assert_eq!(search("30").len(), 6);
    }
}
