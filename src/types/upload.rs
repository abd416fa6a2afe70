use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct UploadRes {
    pub url: String,
}

/// The part of the blob store's PUT response we care about.
#[derive(Deserialize, Debug)]
pub struct BlobPutRes {
    pub url: String,
}
