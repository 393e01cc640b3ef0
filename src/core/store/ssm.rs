//! AWS Systems Manager Parameter Store backend.
//!
//! Issues one `GetParametersByPath` request per page. Credentials and region
//! come from the default AWS provider chain (`AWS_PROFILE`,
//! `AWS_ACCESS_KEY_ID`, `AWS_REGION`, instance metadata, ...), with an
//! optional explicit region override.
//!
//! The SDK is async; the store owns a current-thread tokio runtime and
//! blocks on each request so the rest of the crate stays synchronous.

use aws_sdk_ssm::error::DisplayErrorContext;
use tracing::{debug, trace};

use super::{Page, Parameter, ParameterStore, Query};
use crate::error::{Result, StoreError};

/// Parameter store backed by an SSM client.
pub struct SsmStore {
    client: aws_sdk_ssm::Client,
    runtime: tokio::runtime::Runtime,
}

impl SsmStore {
    /// Wrap an existing client.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Runtime` if the tokio runtime cannot be built.
    pub fn new(client: aws_sdk_ssm::Client) -> Result<Self> {
        Ok(Self {
            client,
            runtime: runtime()?,
        })
    }

    /// Build a client from the ambient AWS configuration.
    ///
    /// `region` overrides whatever the provider chain would pick.
    pub fn connect(region: Option<String>) -> Result<Self> {
        let runtime = runtime()?;

        let config = runtime.block_on(async {
            let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
            if let Some(region) = region {
                loader = loader.region(aws_sdk_ssm::config::Region::new(region));
            }
            loader.load().await
        });

        debug!(
            region = config.region().map(|r| r.as_ref()).unwrap_or("<unset>"),
            "loaded AWS config"
        );

        Ok(Self {
            client: aws_sdk_ssm::Client::new(&config),
            runtime,
        })
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| StoreError::Runtime(e).into())
}

impl ParameterStore for SsmStore {
    fn name(&self) -> &'static str {
        "ssm"
    }

    fn region(&self) -> Option<&str> {
        self.client.config().region().map(|r| r.as_ref())
    }

    fn fetch_page(&self, query: &Query, cursor: Option<&str>) -> Result<Page> {
        trace!(path = %query.path, cursor = ?cursor, "GetParametersByPath");

        let output = self
            .runtime
            .block_on(
                self.client
                    .get_parameters_by_path()
                    .path(&query.path)
                    .recursive(query.recursive)
                    .with_decryption(query.decrypt)
                    .set_next_token(cursor.map(str::to_string))
                    .send(),
            )
            .map_err(|e| StoreError::Request(DisplayErrorContext(&e).to_string()))?;

        let parameters = output
            .parameters()
            .iter()
            .map(|p| -> Result<Parameter> {
                let name = p.name().ok_or_else(|| {
                    StoreError::Request("parameter returned without a name".to_string())
                })?;
                Ok(Parameter::new(name, p.value().unwrap_or_default()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Page {
            parameters,
            next_token: output.next_token().map(str::to_string),
        })
    }
}
