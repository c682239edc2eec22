use tfk8s_schema::Attribute;
use tfk8s_schema::Attributes;
use tfk8s_schema::Validator;
use tfk8s_types::core::persistent_volume_claim::PersistentVolumeClaimSpec;

use crate::schemas::common::label_selector;
use crate::schemas::common::template_meta;
use crate::schemas::core::pod::resource_requirements;
use crate::ResourceKind;

impl ResourceKind for PersistentVolumeClaimSpec {
    const DESCRIPTION: &'static str = "PersistentVolumeClaim is a user's request for and claim to a persistent volume.";

    fn body_attributes() -> Attributes {
        Attributes::new().with(
            "spec",
            Attribute::single_nested(
                persistent_volume_claim_spec(),
                "Spec defines the desired characteristics of a volume requested by a pod author.",
            )
            .required(),
        )
    }
}

/// claim template of a StatefulSet
pub fn persistent_volume_claim_template() -> Attributes {
    Attributes::new()
        .with(
            "metadata",
            Attribute::single_nested(template_meta(), "Standard object's metadata."),
        )
        .with(
            "spec",
            Attribute::single_nested(
                persistent_volume_claim_spec(),
                "Desired characteristics of a volume requested by a pod author.",
            ),
        )
}

pub fn persistent_volume_claim_spec() -> Attributes {
    let data_source = Attributes::new()
        .with(
            "api_group",
            Attribute::string("Group for the resource being referenced."),
        )
        .with(
            "kind",
            Attribute::string("Type of resource being referenced.").required(),
        )
        .with(
            "name",
            Attribute::string("Name of resource being referenced.").required(),
        );

    Attributes::new()
        .with(
            "access_modes",
            Attribute::string_list("The desired access modes the volume should have."),
        )
        .with(
            "data_source",
            Attribute::single_nested(data_source, "Populate the volume with data from an existing source."),
        )
        .with(
            "resources",
            Attribute::single_nested(resource_requirements(), "Minimum resources the volume should have."),
        )
        .with(
            "selector",
            Attribute::single_nested(label_selector(), "A label query over volumes to consider for binding."),
        )
        .with(
            "storage_class_name",
            Attribute::string("Name of the StorageClass required by the claim."),
        )
        .with(
            "volume_mode",
            Attribute::string("What type of volume is required by the claim.")
                .validate(Validator::OneOf(&["Filesystem", "Block"])),
        )
        .with(
            "volume_name",
            Attribute::string("The binding reference to the PersistentVolume backing this claim."),
        )
}
