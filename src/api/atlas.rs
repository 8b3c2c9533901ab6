//! Atlas skill tree lookup.
//!
//! `view-atlas-skill-tree` does not answer with JSON. It redirects to
//! `/fullscreen-atlas-skill-tree/<fragment>` where `<fragment>` is the tree
//! serialized as unpadded base64url. The number of allocated atlas points
//! is the byte at index 6 of the decoded payload. This layout belongs to
//! the vendor's web client and can change without notice.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use tracing::{debug, instrument};

use crate::api::PoeClient;
use crate::api::fetch_utils::fetch_response;
use crate::api::urls::atlas_skill_tree_url;
use crate::constants::atlas::{POINT_COUNT_BYTE_OFFSET, REDIRECT_PATH_PREFIX};
use crate::error::AppError;
use crate::models::Realm;

// Standard alphabet; the vendor leaves junk in the unused low bits of the last symbol.
const ATLAS_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Decodes the atlas payload out of a redirect path.
///
/// Every `-` becomes `+` and every `_` becomes `/`, then the fragment is
/// padded with `=` to a multiple of four and base64-decoded.
pub fn decode_atlas_fragment(path: &str) -> Result<Vec<u8>, AppError> {
    let fragment = path
        .strip_prefix(REDIRECT_PATH_PREFIX)
        .ok_or_else(|| AppError::atlas_missing_fragment(path))?;

    let mut encoded = fragment.replace('-', "+").replace('_', "/");
    while encoded.len() % 4 != 0 {
        encoded.push('=');
    }

    let payload = ATLAS_ENGINE.decode(encoded.as_bytes())?;
    debug!("Decoded atlas payload: {}", hex::encode(&payload));
    Ok(payload)
}

/// Reads the allocated atlas point count from a redirect path.
pub fn atlas_point_byte(path: &str) -> Result<u8, AppError> {
    let payload = decode_atlas_fragment(path)?;
    payload
        .get(POINT_COUNT_BYTE_OFFSET)
        .copied()
        .ok_or(AppError::AtlasPayloadTooShort { len: payload.len() })
}

impl PoeClient {
    /// Number of allocated atlas passive points of an account in a league.
    #[instrument(skip(self))]
    pub async fn atlas_passive_count(
        &self,
        account_name: &str,
        realm: Realm,
        league: &str,
    ) -> Result<u8, AppError> {
        let url = atlas_skill_tree_url(&self.config.web_base_url, account_name, realm, league)?;
        let response = fetch_response(&self.http, &url, self.session_id()).await?;
        let final_path = response.url().path().to_string();
        debug!("Atlas skill tree resolved to: {final_path}");
        atlas_point_byte(&final_path)
    }
}
