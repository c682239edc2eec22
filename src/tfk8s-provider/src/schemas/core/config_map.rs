use tfk8s_schema::Attribute;
use tfk8s_schema::Attributes;
use tfk8s_types::core::config_map::ConfigMapSpec;

use crate::ResourceKind;

impl ResourceKind for ConfigMapSpec {
    const DESCRIPTION: &'static str = "ConfigMap holds configuration data for pods to consume.";

    fn body_attributes() -> Attributes {
        Attributes::new()
            .with(
                "binary_data",
                Attribute::string_map("Base64 encoded binary data, keys may not overlap with data."),
            )
            .with("data", Attribute::string_map("Configuration data."))
            .with(
                "immutable",
                Attribute::bool("If set to true, data stored in the ConfigMap cannot be updated."),
            )
    }
}
