//! Thumbnail service
//!
//! Runs one request end to end:
//!
//! ```text
//! ResolveSource ─▶ ResolvePage ─▶ Rasterize ─▶ Encode ─▶ Write ─▶ OutputDescriptor
//!       │               │             │           │         │
//!       └───────────────┴─────────────┴───────────┴─────────┴──▶ ThumbnailError
//! ```
//!
//! Requests share nothing mutable. Each one allocates its own render target,
//! draws a fresh random output name and writes exactly one file on success
//! (none on failure). `generate` completes once; there is no cancellation.

mod error;
mod types;

pub use error::{BoxError, ErrorKind, ThumbnailError};
pub use types::{OutputDescriptor, ThumbnailRequest};

use std::sync::Arc;

use rand::Rng;

use crate::document::{DocumentError, DocumentResolver, SourceReference};
use crate::naming;
use crate::raster::{self, CodecEncoder, PixelEncoder, RasterError, RenderPolicy};
use crate::storage::{self, OutputDirectory};

#[derive(Clone)]
pub struct ThumbnailService {
    resolver: Arc<dyn DocumentResolver>,
    output: Arc<dyn OutputDirectory>,
    encoder: Arc<dyn PixelEncoder>,
    policy: RenderPolicy,
}

impl ThumbnailService {
    pub fn new(
        resolver: Arc<dyn DocumentResolver>,
        output: Arc<dyn OutputDirectory>,
        policy: RenderPolicy,
    ) -> Self {
        Self {
            resolver,
            output,
            encoder: Arc::new(CodecEncoder),
            policy,
        }
    }

    /// Replace the default `image` codecs
    pub fn with_encoder(mut self, encoder: Arc<dyn PixelEncoder>) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn policy(&self) -> &RenderPolicy {
        &self.policy
    }

    /// Generate a thumbnail on the blocking thread pool
    pub async fn generate(
        &self,
        request: ThumbnailRequest,
    ) -> Result<OutputDescriptor, ThumbnailError> {
        let service = self.clone();
        let index = request.page_index;

        tokio::task::spawn_blocking(move || {
            service.generate_with_rng(&request, &mut rand::thread_rng())
        })
        .await
        .map_err(|e| ThumbnailError::RenderFailed {
            index,
            cause: Box::new(e),
        })?
    }

    /// Generate a thumbnail synchronously, naming the output with `rng`
    pub fn generate_with_rng<R: Rng>(
        &self,
        request: &ThumbnailRequest,
        rng: &mut R,
    ) -> Result<OutputDescriptor, ThumbnailError> {
        let span = tracing::info_span!(
            "thumbnail",
            source = %request.source,
            page = request.page_index
        );
        let _enter = span.enter();

        match self.run(request, rng) {
            Ok(descriptor) => {
                tracing::info!(
                    "Generated thumbnail {} ({}x{})",
                    descriptor.uri,
                    descriptor.width,
                    descriptor.height
                );
                Ok(descriptor)
            }
            Err(err) => {
                tracing::warn!("Thumbnail generation failed [{}]: {}", err.code(), err);
                Err(err)
            }
        }
    }

    fn run<R: Rng>(
        &self,
        request: &ThumbnailRequest,
        rng: &mut R,
    ) -> Result<OutputDescriptor, ThumbnailError> {
        let index = request.page_index;
        let not_found = |cause: DocumentError| ThumbnailError::SourceNotFound {
            locator: request.source.clone(),
            cause,
        };

        let source = SourceReference::parse(&request.source).map_err(not_found)?;
        let document = self.resolver.resolve(&source).map_err(not_found)?;

        let page_count = document.page_count();
        tracing::debug!("Resolved {} with {} pages", source, page_count);

        let page_index = usize::try_from(index)
            .ok()
            .filter(|i| *i < page_count)
            .ok_or(ThumbnailError::PageOutOfRange { index, page_count })?;

        let page = document.page(page_index).map_err(|e| match e {
            DocumentError::PageOutOfRange { .. } => {
                ThumbnailError::PageOutOfRange { index, page_count }
            }
            other => ThumbnailError::RenderFailed {
                index,
                cause: Box::new(other),
            },
        })?;

        let rasterized =
            raster::rasterize_with(page.as_ref(), &self.policy, self.encoder.as_ref()).map_err(
                |e| match e {
                    RasterError::Encode(cause) => ThumbnailError::EncodingFailed { index, cause },
                    other => ThumbnailError::RenderFailed {
                        index,
                        cause: Box::new(other),
                    },
                },
            )?;

        let dir = self
            .output
            .resolve()
            .map_err(|cause| ThumbnailError::WriteFailed {
                target: "output directory".to_string(),
                cause,
            })?;
        let name = naming::output_file_name(
            request.logical_name(),
            page_index,
            self.policy.format,
            rng,
        );
        let path = storage::write_new_file(&dir, &name, &rasterized.image.bytes).map_err(
            |cause| ThumbnailError::WriteFailed {
                target: dir.join(&name).display().to_string(),
                cause,
            },
        )?;

        let (width, height) = rasterized.bounds.truncated_size();
        Ok(OutputDescriptor {
            uri: storage::file_uri(&path),
            path,
            width,
            height,
            format: rasterized.image.format,
        })
    }
}
