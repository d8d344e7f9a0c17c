use crate::api::ApiOperation;
use reqwest::StatusCode;
use snafu::Snafu;
use std::num::ParseIntError;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse `{}` as a number of seconds", name))]
    ParseTimeout {
        source: ParseIntError,
        name: &'static str,
    },
    #[snafu(display("Invalid students API url {:?}: {}", url, reason))]
    InvalidApiUrl { url: String, reason: String },
    #[snafu(display("Error building HTTP client"))]
    BuildClient { source: reqwest::Error },
    #[snafu(display("Error sending {} request to the students API", operation))]
    Request {
        source: reqwest::Error,
        operation: ApiOperation,
    },
    #[snafu(display("Students API rejected {} request with {}", operation, status))]
    Rejected {
        operation: ApiOperation,
        status: StatusCode,
    },
    #[snafu(display("Error decoding {} response from the students API", operation))]
    Decode {
        source: reqwest::Error,
        operation: ApiOperation,
    },
}
