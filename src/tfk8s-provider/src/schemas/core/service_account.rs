use tfk8s_schema::Attribute;
use tfk8s_schema::Attributes;
use tfk8s_schema::Validator;
use tfk8s_types::core::service_account::ServiceAccountSpec;

use crate::schemas::common::local_object_reference;
use crate::ResourceKind;

impl ResourceKind for ServiceAccountSpec {
    const DESCRIPTION: &'static str = "ServiceAccount binds together a name, a principal and a set of secrets.";

    fn body_attributes() -> Attributes {
        let object_reference = Attributes::new()
            .with("api_version", Attribute::string("API version of the referent."))
            .with(
                "field_path",
                Attribute::string("Piece of an object referred to instead of an entire object."),
            )
            .with("kind", Attribute::string("Kind of the referent."))
            .with(
                "name",
                Attribute::string("Name of the referent.").validate(Validator::Name),
            )
            .with(
                "namespace",
                Attribute::string("Namespace of the referent.").validate(Validator::LabelName),
            );

        Attributes::new()
            .with(
                "automount_service_account_token",
                Attribute::bool("Whether pods running as this service account should have a token automatically mounted."),
            )
            .with(
                "image_pull_secrets",
                Attribute::list_nested(
                    local_object_reference(),
                    "References to secrets to use for pulling images in pods that reference this account.",
                ),
            )
            .with(
                "secrets",
                Attribute::list_nested(object_reference, "Secrets pods running as this account may use."),
            )
    }
}
