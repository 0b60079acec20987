use crate::error::GovernanceError;
use std::env;

const PRINCIPAL_TYPES: [&str; 2] = ["USER", "GROUP"];
const TARGET_TYPES: [&str; 1] = ["AWS_ACCOUNT"];

/// Where configuration values come from. Lambda passes them as environment
/// variables; tests hand in a map.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

fn required(source: &impl EnvSource, name: &'static str) -> Result<String, GovernanceError> {
    source
        .get(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(GovernanceError::MissingVariable(name))
}

fn one_of(
    source: &impl EnvSource,
    name: &'static str,
    allowed: &[&str],
) -> Result<String, GovernanceError> {
    let value = required(source, name)?;
    if allowed.contains(&value.as_str()) {
        Ok(value)
    } else {
        Err(GovernanceError::InvalidVariable { name, value })
    }
}

/// Settings for attaching a permission set to newly vended accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct AttacherConfig {
    pub instance_arn: String,
    pub permission_set_arn: String,
    pub principal_id: String,
    pub principal_type: String,
    pub target_type: String,
}

impl AttacherConfig {
    pub fn load(source: &impl EnvSource) -> Result<Self, GovernanceError> {
        Ok(AttacherConfig {
            instance_arn: required(source, "IDENTITY_CENTER_ARN")?,
            permission_set_arn: required(source, "PERMISSION_SET")?,
            principal_id: required(source, "PRINCIPAL_ID")?,
            principal_type: one_of(source, "PRINCIPAL_TYPE", &PRINCIPAL_TYPES)?,
            target_type: one_of(source, "TARGET_TYPE", &TARGET_TYPES)?,
        })
    }
}

/// Settings for the admin group guard.
#[derive(Debug, Clone, PartialEq)]
pub struct GuardConfig {
    pub protected_group_id: String,
    pub identity_store_id: String,
}

impl GuardConfig {
    pub fn load(source: &impl EnvSource) -> Result<Self, GovernanceError> {
        Ok(GuardConfig {
            protected_group_id: required(source, "CONTROL_TOWER_ADMIN_GROUP_ID")?,
            identity_store_id: required(source, "IDENTITY_CENTER_ID")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{AttacherConfig, EnvSource, GuardConfig};
    use crate::error::GovernanceError;
    use std::collections::HashMap;

    struct MapSource(HashMap<&'static str, &'static str>);

    impl EnvSource for MapSource {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).map(|value| value.to_string())
        }
    }

    fn attacher_source() -> HashMap<&'static str, &'static str> {
        let mut vars = HashMap::new();
        vars.insert("IDENTITY_CENTER_ARN", "arn:aws:sso:::instance/ssoins-1111111111111111");
        vars.insert(
            "PERMISSION_SET",
            "arn:aws:sso:::permissionSet/ssoins-1111111111111111/ps-2222222222222222",
        );
        vars.insert("PRINCIPAL_ID", "906757b4-2011-70e5-9b7e-3f2ab5c1c6f1");
        vars.insert("PRINCIPAL_TYPE", "GROUP");
        vars.insert("TARGET_TYPE", "AWS_ACCOUNT");
        vars
    }

    #[test]
    fn test_load_attacher_config() {
        let config = AttacherConfig::load(&MapSource(attacher_source())).unwrap();
        assert_eq!(
            config,
            AttacherConfig {
                instance_arn: "arn:aws:sso:::instance/ssoins-1111111111111111".to_string(),
                permission_set_arn:
                    "arn:aws:sso:::permissionSet/ssoins-1111111111111111/ps-2222222222222222"
                        .to_string(),
                principal_id: "906757b4-2011-70e5-9b7e-3f2ab5c1c6f1".to_string(),
                principal_type: "GROUP".to_string(),
                target_type: "AWS_ACCOUNT".to_string(),
            }
        );
    }

    #[test]
    fn test_attacher_config_missing_variable() {
        let mut vars = attacher_source();
        vars.remove("PERMISSION_SET");
        let result = AttacherConfig::load(&MapSource(vars));
        assert!(matches!(
            result,
            Err(GovernanceError::MissingVariable("PERMISSION_SET"))
        ));
    }

    #[test]
    fn test_attacher_config_blank_variable() {
        let mut vars = attacher_source();
        vars.insert("PRINCIPAL_ID", "  ");
        let result = AttacherConfig::load(&MapSource(vars));
        assert!(matches!(
            result,
            Err(GovernanceError::MissingVariable("PRINCIPAL_ID"))
        ));
    }

    #[test]
    fn test_attacher_config_invalid_principal_type() {
        let mut vars = attacher_source();
        vars.insert("PRINCIPAL_TYPE", "ROLE");
        let result = AttacherConfig::load(&MapSource(vars));
        match result {
            Err(GovernanceError::InvalidVariable { name, value }) => {
                assert_eq!(name, "PRINCIPAL_TYPE");
                assert_eq!(value, "ROLE");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_load_guard_config() {
        let mut vars = HashMap::new();
        vars.insert("CONTROL_TOWER_ADMIN_GROUP_ID", "a4e8e4b8-f0b1-7012-7f4c-0d8ea1e2b3c4");
        vars.insert("IDENTITY_CENTER_ID", "d-9067c2a3b4");
        let config = GuardConfig::load(&MapSource(vars)).unwrap();
        assert_eq!(
            config,
            GuardConfig {
                protected_group_id: "a4e8e4b8-f0b1-7012-7f4c-0d8ea1e2b3c4".to_string(),
                identity_store_id: "d-9067c2a3b4".to_string(),
            }
        );
    }

    #[test]
    fn test_guard_config_missing_store() {
        let mut vars = HashMap::new();
        vars.insert("CONTROL_TOWER_ADMIN_GROUP_ID", "a4e8e4b8-f0b1-7012-7f4c-0d8ea1e2b3c4");
        let result = GuardConfig::load(&MapSource(vars));
        assert!(matches!(
            result,
            Err(GovernanceError::MissingVariable("IDENTITY_CENTER_ID"))
        ));
    }
}
