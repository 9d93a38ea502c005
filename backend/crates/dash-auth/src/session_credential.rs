use crate::{
    APP_DELIMITER, AuthError, FIELD_DELIMITER, Identity, Result as AuthErrorResult, SharedSecret,
    constant_time_eq,
};

use std::panic::Location;

use error_location::ErrorLocation;
use sha1::{Digest, Sha1};

/// Digest-sealed login credential stored client-side.
///
/// Plain form is `identity:nickname:app1,app2:hexdigest`; the cookie carries the
/// percent-encoded plain form. A credential is never modified: every change in
/// identity or application set means building a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCredential {
    identity: Identity,
    nickname: String,
    applications: Vec<String>,
    digest: String,
}

impl SessionCredential {
    /// Seal `identity` and the applications it administers with `secret`.
    ///
    /// Application order is part of the digest; callers pass the order the
    /// directory reports.
    #[track_caller]
    pub fn build(
        identity: &Identity,
        applications: &[String],
        secret: &SharedSecret,
    ) -> AuthErrorResult<Self> {
        for name in applications {
            validate_application_name(name)?;
        }

        let nickname = identity.nickname().to_string();
        let serialized = applications.join(APP_DELIMITER);
        let digest = compute_digest(identity.as_str(), &nickname, &serialized, secret);

        Ok(Self {
            identity: identity.clone(),
            nickname,
            applications: applications.to_vec(),
            digest,
        })
    }

    /// Parse a percent-encoded cookie value back into its four fields.
    ///
    /// Does not check the digest; call [`SessionCredential::verify`] for that.
    #[track_caller]
    pub fn decode(value: &str) -> AuthErrorResult<Self> {
        let plain = urlencoding::decode(value).map_err(|e| AuthError::Decode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let fields: Vec<&str> = plain.split(FIELD_DELIMITER).collect();
        if fields.len() != 4 {
            return Err(AuthError::MalformedCredential {
                message: format!("expected 4 fields, found {}", fields.len()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let identity = Identity::parse(fields[0])?;
        let applications = if fields[2].is_empty() {
            Vec::new()
        } else {
            fields[2].split(APP_DELIMITER).map(String::from).collect()
        };

        Ok(Self {
            identity,
            nickname: fields[1].to_string(),
            applications,
            digest: fields[3].to_string(),
        })
    }

    /// Recompute the digest with `secret` and compare it in constant time.
    #[track_caller]
    pub fn verify(&self, secret: &SharedSecret) -> AuthErrorResult<()> {
        if self.nickname != self.identity.nickname() {
            return Err(AuthError::MalformedCredential {
                message: format!("nickname does not belong to {}", self.identity),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let expected = compute_digest(
            self.identity.as_str(),
            &self.nickname,
            &self.serialized_applications(),
            secret,
        );

        if !constant_time_eq(expected.as_bytes(), self.digest.as_bytes()) {
            return Err(AuthError::DigestMismatch {
                identity: self.identity.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn applications(&self) -> &[String] {
        &self.applications
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn serialized_applications(&self) -> String {
        self.applications.join(APP_DELIMITER)
    }

    /// Colon-delimited form before percent-encoding.
    pub fn to_plain_string(&self) -> String {
        format!(
            "{identity}{d}{nickname}{d}{apps}{d}{digest}",
            identity = self.identity,
            nickname = self.nickname,
            apps = self.serialized_applications(),
            digest = self.digest,
            d = FIELD_DELIMITER,
        )
    }

    /// Percent-encoded form, safe to store as an opaque cookie value.
    pub fn encode(&self) -> String {
        urlencoding::encode(&self.to_plain_string()).into_owned()
    }
}

/// Build the percent-encoded credential for `identity` in one step.
#[track_caller]
pub fn build_credential(
    identity: &Identity,
    applications: &[String],
    secret: &SharedSecret,
) -> AuthErrorResult<String> {
    Ok(SessionCredential::build(identity, applications, secret)?.encode())
}

/// `hex(sha1(identity || nickname || serialized_apps || secret))`
pub fn compute_digest(
    identity: &str,
    nickname: &str,
    serialized_apps: &str,
    secret: &SharedSecret,
) -> String {
    let mut hasher = Sha1::new();
    hasher.update(identity.as_bytes());
    hasher.update(nickname.as_bytes());
    hasher.update(serialized_apps.as_bytes());
    hasher.update(secret.expose().as_bytes());
    hex::encode(hasher.finalize())
}

#[track_caller]
fn validate_application_name(name: &str) -> AuthErrorResult<()> {
    let message = if name.is_empty() {
        "application name cannot be empty"
    } else if name.contains(FIELD_DELIMITER) || name.contains(APP_DELIMITER) {
        "application name cannot contain ':' or ','"
    } else {
        return Ok(());
    };

    Err(AuthError::InvalidApplicationName {
        name: name.to_string(),
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
