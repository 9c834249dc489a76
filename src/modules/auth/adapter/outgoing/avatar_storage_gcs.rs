use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::avatar_storage::{
    AvatarStorage, AvatarStorageError, AvatarUploadTarget,
};

/// TTL for signed avatar upload URLs.
const SIGNED_URL_TTL: Duration = Duration::from_secs(15 * 60);

const ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

fn avatar_object_key(user_id: Uuid, content_type: &str) -> String {
    let ext = match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        _ => "bin",
    };
    format!("avatars/{}.{}", user_id, ext)
}

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn public_object_url(bucket: &str, object: &str) -> String {
    format!("https://storage.googleapis.com/{}/{}", bucket, object)
}

/// Internal seam so tests never touch google-cloud-storage types.
#[async_trait]
trait GcsSigner: Send + Sync {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String>;
}

pub struct GcsAvatarStorage {
    signer: Arc<OnceCell<Box<dyn GcsSigner>>>,
    bucket: String,
    signed_url_ttl: Duration,
}

impl GcsAvatarStorage {
    /// Synchronous constructor - the signer is initialized lazily on first use.
    pub fn new(bucket: String) -> Self {
        Self {
            signer: Arc::new(OnceCell::new()),
            bucket,
            signed_url_ttl: SIGNED_URL_TTL,
        }
    }

    async fn get_signer(&self) -> Result<&dyn GcsSigner, Box<dyn std::error::Error + Send + Sync>> {
        self.signer
            .get_or_try_init(|| async {
                let real = RealGcsSigner::new()?;
                Ok(Box::new(real) as Box<dyn GcsSigner>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_signer(signer: Box<dyn GcsSigner>, bucket: String, signed_url_ttl: Duration) -> Self {
        let once = OnceCell::new();
        let _ = once.set(signer);

        Self {
            signer: Arc::new(once),
            bucket,
            signed_url_ttl,
        }
    }
}

#[async_trait]
impl AvatarStorage for GcsAvatarStorage {
    async fn prepare_upload(
        &self,
        user_id: Uuid,
        content_type: &str,
    ) -> Result<AvatarUploadTarget, AvatarStorageError> {
        if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
            return Err(AvatarStorageError::UnsupportedContentType(
                content_type.to_string(),
            ));
        }

        let signer = self
            .get_signer()
            .await
            .map_err(|e| AvatarStorageError::SignFailed(e.to_string()))?;

        let object = avatar_object_key(user_id, content_type);
        let upload_url = signer
            .sign_put_url(
                &bucket_resource(&self.bucket),
                &object,
                self.signed_url_ttl,
            )
            .await
            .map_err(AvatarStorageError::SignFailed)?;

        Ok(AvatarUploadTarget {
            upload_url,
            public_url: public_object_url(&self.bucket, &object),
        })
    }
}

// ============================================================================
// Real Google Cloud signer (google-cloud-auth / google-cloud-storage)
// ============================================================================

struct RealGcsSigner {
    signer: google_cloud_auth::signer::Signer,
}

impl RealGcsSigner {
    fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS signer...");

        let signer = google_cloud_auth::credentials::Builder::default()
            .build_signer()
            .map_err(|e| {
                tracing::error!("Failed to build GCS signer: {:?}", e);
                e
            })?;

        Ok(Self { signer })
    }
}

#[async_trait]
impl GcsSigner for RealGcsSigner {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        let url = google_cloud_storage::builder::storage::SignedUrlBuilder::for_object(
            bucket_resource.to_string(),
            object_name.to_string(),
        )
        .with_method(google_cloud_storage::http::Method::PUT)
        .with_expiration(ttl)
        .sign_with(&self.signer)
        .await
        .map_err(|e| e.to_string())?;

        Ok(url)
    }
}
