//! Resource clients
//!
//! One client per resource namespace, each a thin mapping from an operation
//! to an HTTP verb and URL:
//!
//! | Client         | Namespace                                   |
//! |----------------|---------------------------------------------|
//! | [`Surveys`]    | `/surveys[/{survey_id}]`                    |
//! | [`Responses`]  | `/surveys/{survey_id}/responses[/{id}]`     |
//! | [`Collectors`] | `/surveys/{survey_id}/collectors[/{id}]`    |

mod collectors;
mod params;
mod responses;
mod surveys;

pub use collectors::Collectors;
pub use params::{ListParams, DEFAULT_PAGE, DEFAULT_PER_PAGE};
pub use responses::Responses;
pub use surveys::Surveys;

use crate::auth::AuthContext;
use crate::error::Result;
use crate::http::RequestConfig;
use crate::types::{into_record, Fields, Record};
use reqwest::Method;
use serde_json::Value;

/// GET a single record
pub(crate) async fn get_record(auth: &AuthContext, url: &str) -> Result<Record> {
    let body = auth.send_json(Method::GET, url, RequestConfig::new()).await?;
    into_record(body)
}

/// Send `fields` as the JSON body and return the record the API answers with
pub(crate) async fn send_record(
    auth: &AuthContext,
    method: Method,
    url: &str,
    fields: Fields,
) -> Result<Record> {
    let config = RequestConfig::new().json(Value::Object(fields));
    let body = auth.send_json(method, url, config).await?;
    into_record(body)
}

/// DELETE a record; `true` once the API acknowledged with a 2xx
pub(crate) async fn delete_record(auth: &AuthContext, url: &str) -> Result<bool> {
    auth.send(Method::DELETE, url).await?;
    Ok(true)
}
