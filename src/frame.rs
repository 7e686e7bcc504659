//! Frame metadata for the hosting platform.
//! Everything here is fixed configuration: the manifest a host fetches to
//! identify the app, and the embed blob published into page metadata. The
//! signature material is supplied externally and republished verbatim.

use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "Pixelframe";
pub const APP_URL: &str = "https://pixelframe.app";
pub const APP_DESCRIPTION: &str = "A shared pixel drawing surface";
pub const SPLASH_BACKGROUND: &str = "#f7f7f7";

/// How often the published embed metadata is refreshed, in seconds.
pub const EMBED_REVALIDATE_SECS: u32 = 300;

/// Domain-ownership proof signed by the app's custody key. Opaque to us.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAssociation {
    pub header: String,
    pub payload: String,
    pub signature: String,
}

/// Identity block of the manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestApp {
    pub version: String,
    pub name: String,
    pub icon_url: String,
    pub home_url: String,
    pub image_url: String,
    pub button_title: String,
    pub splash_image_url: String,
    pub splash_background_color: String,
}

/// The fixed document served for a manifest request
/// (`/.well-known/farcaster.json` shape).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameManifest {
    pub account_association: AccountAssociation,
    pub frame: ManifestApp,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchAction {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub url: String,
    pub splash_image_url: String,
    pub splash_background_color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedButton {
    pub title: String,
    pub action: LaunchAction,
}

/// The `fc:frame` page-metadata blob the host parses to render a launch
/// button over the preview image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameEmbed {
    pub version: String,
    pub image_url: String,
    pub button: EmbedButton,
}

pub fn manifest() -> FrameManifest {
    FrameManifest {
        account_association: AccountAssociation {
            header: "eyJmaWQiOjIxNzQ4LCJ0eXBlIjoiY3VzdG9keSIsImtleSI6IjB4NGM1ZjZkOGE5YjBjMWQyZTNmNGE1YjZjN2Q4ZTlmMGExYjJjM2Q0ZSJ9"
                .to_string(),
            payload: "eyJkb21haW4iOiJwaXhlbGZyYW1lLmFwcCJ9".to_string(),
            signature: "MHhiZDg3M2E2ZjE0YzU5ZTAyOGQ3NjkxY2EzOTU0YjhhMmEwZjkxYzM3NWRlMDYxYjJhNDY4MGE3NWUzZDkwYjFjMmY0ZTg1NjFi"
                .to_string(),
        },
        frame: ManifestApp {
            version: "1".to_string(),
            name: APP_NAME.to_string(),
            icon_url: format!("{APP_URL}/icon.png"),
            home_url: APP_URL.to_string(),
            image_url: format!("{APP_URL}/opengraph-image"),
            button_title: "Launch Pixelframe".to_string(),
            splash_image_url: format!("{APP_URL}/splash.svg"),
            splash_background_color: SPLASH_BACKGROUND.to_string(),
        },
    }
}

pub fn embed() -> FrameEmbed {
    FrameEmbed {
        version: "next".to_string(),
        image_url: format!("{APP_URL}/opengraph-image"),
        button: EmbedButton {
            title: "Launch Pixelframe".to_string(),
            action: LaunchAction {
                kind: "launch_frame".to_string(),
                name: APP_NAME.to_string(),
                url: APP_URL.to_string(),
                splash_image_url: format!("{APP_URL}/splash.svg"),
                splash_background_color: SPLASH_BACKGROUND.to_string(),
            },
        },
    }
}

/// Embed serialized for the `fc:frame` meta tag. Serializing a constant
/// value cannot fail; an empty string degrades to publishing nothing.
pub fn embed_json() -> String {
    serde_json::to_string(&embed()).unwrap_or_default()
}

/// Manifest serialized as the hosting platform fetches it.
pub fn manifest_json() -> String {
    serde_json::to_string(&manifest()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn embed_wire_shape_is_camel_case() {
        let v: Value = serde_json::from_str(&embed_json()).unwrap();
        assert_eq!(v["version"], "next");
        assert_eq!(v["imageUrl"], format!("{APP_URL}/opengraph-image"));
        assert_eq!(v["button"]["title"], "Launch Pixelframe");
        assert_eq!(v["button"]["action"]["type"], "launch_frame");
        assert_eq!(v["button"]["action"]["url"], APP_URL);
        assert_eq!(
            v["button"]["action"]["splashBackgroundColor"],
            SPLASH_BACKGROUND
        );
    }

    #[test]
    fn manifest_carries_identity_and_signature_fields() {
        let v: Value = serde_json::from_str(&manifest_json()).unwrap();
        for key in ["header", "payload", "signature"] {
            assert!(
                v["accountAssociation"][key].is_string(),
                "missing accountAssociation.{key}"
            );
        }
        assert_eq!(v["frame"]["name"], APP_NAME);
        assert_eq!(v["frame"]["homeUrl"], APP_URL);
        assert!(v["frame"]["iconUrl"].as_str().unwrap().starts_with(APP_URL));
    }

    #[test]
    fn embed_round_trips() {
        let parsed: FrameEmbed = serde_json::from_str(&embed_json()).unwrap();
        assert_eq!(parsed, embed());
    }

    #[test]
    fn embed_is_constant_between_calls() {
        assert_eq!(embed_json(), embed_json());
    }
}
