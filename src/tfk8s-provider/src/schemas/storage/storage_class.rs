use tfk8s_schema::Attribute;
use tfk8s_schema::Attributes;
use tfk8s_schema::Validator;
use tfk8s_types::storage::storage_class::StorageClassSpec;

use crate::ResourceKind;

impl ResourceKind for StorageClassSpec {
    const DESCRIPTION: &'static str =
        "StorageClass describes the parameters for a class of storage for which PersistentVolumes can be dynamically provisioned.";

    fn body_attributes() -> Attributes {
        let requirement = Attributes::new()
            .with("key", Attribute::string("The label key that the selector applies to.").required())
            .with(
                "values",
                Attribute::string_list("An array of string values, one must match the label.").required(),
            );
        let topology_term = Attributes::new().with(
            "match_label_expressions",
            Attribute::list_nested(requirement, "A list of topology selector requirements by labels."),
        );

        Attributes::new()
            .with(
                "allow_volume_expansion",
                Attribute::bool("Shows whether the storage class allows volume expand."),
            )
            .with(
                "allowed_topologies",
                Attribute::list_nested(topology_term, "Restrict the node topologies where volumes can be dynamically provisioned."),
            )
            .with(
                "mount_options",
                Attribute::string_list("Mount options used by dynamically provisioned PersistentVolumes."),
            )
            .with(
                "parameters",
                Attribute::string_map("Parameters for the provisioner that should create volumes of this storage class."),
            )
            .with(
                "provisioner",
                Attribute::string("Type of the provisioner.").required(),
            )
            .with(
                "reclaim_policy",
                Attribute::string("Reclaim policy of dynamically provisioned PersistentVolumes.")
                    .validate(Validator::OneOf(&["Delete", "Retain", "Recycle"])),
            )
            .with(
                "volume_binding_mode",
                Attribute::string("How PersistentVolumeClaims should be provisioned and bound.")
                    .validate(Validator::OneOf(&["Immediate", "WaitForFirstConsumer"])),
            )
    }
}
