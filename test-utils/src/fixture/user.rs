//! User fixtures.

/// Password accepted by the registration rules.
pub const DEFAULT_PASSWORD: &str = "P@ssw0rd";

/// Well-formed argon2id PHC string stored by factories.
///
/// It does not verify against `DEFAULT_PASSWORD`.
pub const DEFAULT_PASSWORD_HASH: &str = "$argon2id$v=19$m=15000,t=2,p=1$\
    gZiV/M1gPc22ElAH/Jh1Hw$\
    CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";
