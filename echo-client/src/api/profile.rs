//! Twin profile endpoints: read and tune the assistant's personality.

use echo_types::ClientError;
use serde::{Deserialize, Serialize};

use crate::client::EchoClient;

/// Personality configuration of the user's AI twin.
///
/// Both axes are percentages from 0 to 100; fresh accounts start at 50/50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwinProfile {
    /// How energetic the twin's tone is.
    pub energy: u8,
    /// How formal the twin's tone is.
    pub formality: u8,
}

/// Acknowledgement for a profile update.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdateAck {
    /// Backend status string, `success` on success.
    pub status: String,
    /// The profile as stored.
    pub profile: TwinProfile,
}

impl EchoClient {
    /// Fetch the current twin profile.
    pub async fn twin_profile(&self) -> Result<TwinProfile, ClientError> {
        self.get_json("/api/twin/profile").await
    }

    /// Replace the twin profile with `profile`.
    pub async fn update_twin_profile(
        &self,
        profile: TwinProfile,
    ) -> Result<ProfileUpdateAck, ClientError> {
        self.put_json("/api/twin/profile", &profile).await
    }
}
