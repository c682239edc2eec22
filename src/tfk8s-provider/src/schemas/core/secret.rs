use tfk8s_schema::Attribute;
use tfk8s_schema::Attributes;
use tfk8s_types::core::secret::SecretSpec;

use crate::ResourceKind;

impl ResourceKind for SecretSpec {
    const DESCRIPTION: &'static str = "Secret holds secret data of a certain type.";

    fn body_attributes() -> Attributes {
        Attributes::new()
            .with(
                "data",
                Attribute::string_map("Base64 encoded secret data.").sensitive(),
            )
            .with(
                "immutable",
                Attribute::bool("If set to true, data stored in the Secret cannot be updated."),
            )
            .with(
                "string_data",
                Attribute::string_map("Non-binary secret data in string form, merged into data on write.")
                    .sensitive(),
            )
            .with(
                "type",
                Attribute::string("Used to facilitate programmatic handling of secret data."),
            )
    }
}
