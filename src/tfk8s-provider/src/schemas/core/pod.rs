use tfk8s_schema::Attribute;
use tfk8s_schema::Attributes;
use tfk8s_schema::Validator;
use tfk8s_types::core::pod::PodSpec;

use crate::schemas::common::label_selector;
use crate::schemas::common::local_object_reference;
use crate::schemas::common::object_field_selector;
use crate::schemas::common::template_meta;
use crate::schemas::core::affinity::affinity;
use crate::ResourceKind;

impl ResourceKind for PodSpec {
    const DESCRIPTION: &'static str =
        "Pod is a collection of containers that can run on a host.";

    fn body_attributes() -> Attributes {
        Attributes::new().with(
            "spec",
            Attribute::single_nested(pod_spec(), "Specification of the desired behavior of the pod.")
                .required(),
        )
    }
}

/// pod template used by workload controllers
pub fn pod_template() -> Attributes {
    Attributes::new()
        .with(
            "metadata",
            Attribute::single_nested(template_meta(), "Standard object's metadata."),
        )
        .with(
            "spec",
            Attribute::single_nested(pod_spec(), "Specification of the desired behavior of the pod."),
        )
}

pub fn pod_spec() -> Attributes {
    Attributes::new()
        .with(
            "active_deadline_seconds",
            Attribute::int64("Duration in seconds the pod may be active before the system tries to terminate it.")
                .validate(Validator::Int64AtLeast(1)),
        )
        .with(
            "affinity",
            Attribute::single_nested(affinity(), "If specified, the pod's scheduling constraints."),
        )
        .with(
            "automount_service_account_token",
            Attribute::bool("Whether a service account token should be automatically mounted."),
        )
        .with(
            "containers",
            Attribute::list_nested(container(), "List of containers belonging to the pod.").required(),
        )
        .with(
            "dns_policy",
            Attribute::string("DNS policy for the pod.").validate(Validator::OneOf(&[
                "ClusterFirstWithHostNet",
                "ClusterFirst",
                "Default",
                "None",
            ])),
        )
        .with(
            "enable_service_links",
            Attribute::bool("Whether information about services should be injected into the pod's environment variables."),
        )
        .with(
            "host_ipc",
            Attribute::bool("Use the host's ipc namespace.").k8s_name("hostIPC"),
        )
        .with("host_network", Attribute::bool("Host networking requested for this pod."))
        .with(
            "host_pid",
            Attribute::bool("Use the host's pid namespace.").k8s_name("hostPID"),
        )
        .with(
            "hostname",
            Attribute::string("Specifies the hostname of the Pod.").validate(Validator::LabelName),
        )
        .with(
            "image_pull_secrets",
            Attribute::list_nested(
                local_object_reference(),
                "References to secrets in the same namespace to use for pulling any of the images.",
            ),
        )
        .with(
            "init_containers",
            Attribute::list_nested(container(), "List of initialization containers belonging to the pod."),
        )
        .with(
            "node_name",
            Attribute::string("Request to schedule this pod onto a specific node."),
        )
        .with(
            "node_selector",
            Attribute::string_map("Selector which must match a node's labels for the pod to be scheduled on that node.")
                .validate(Validator::Labels),
        )
        .with("priority", Attribute::int64("The priority value."))
        .with(
            "priority_class_name",
            Attribute::string("Indicates the pod's priority."),
        )
        .with(
            "restart_policy",
            Attribute::string("Restart policy for all containers within the pod.")
                .validate(Validator::OneOf(&["Always", "OnFailure", "Never"])),
        )
        .with(
            "runtime_class_name",
            Attribute::string("RuntimeClass object which should be used to run this pod."),
        )
        .with(
            "scheduler_name",
            Attribute::string("If specified, the pod will be dispatched by specified scheduler."),
        )
        .with(
            "security_context",
            Attribute::single_nested(
                pod_security_context(),
                "Pod-level security attributes and common container settings.",
            ),
        )
        .with(
            "service_account_name",
            Attribute::string("Name of the ServiceAccount to use to run this pod.")
                .validate(Validator::Name),
        )
        .with(
            "share_process_namespace",
            Attribute::bool("Share a single process namespace between all of the containers in a pod."),
        )
        .with(
            "subdomain",
            Attribute::string("Subdomain of the pod's fully qualified hostname.")
                .validate(Validator::LabelName),
        )
        .with(
            "termination_grace_period_seconds",
            Attribute::int64("Duration in seconds the pod needs to terminate gracefully.")
                .validate(Validator::Int64AtLeast(0)),
        )
        .with(
            "tolerations",
            Attribute::list_nested(toleration(), "If specified, the pod's tolerations."),
        )
        .with(
            "topology_spread_constraints",
            Attribute::list_nested(
                topology_spread_constraint(),
                "How a group of pods ought to spread across topology domains.",
            ),
        )
        .with(
            "volumes",
            Attribute::list_nested(
                volume(),
                "List of volumes that can be mounted by containers belonging to the pod.",
            ),
        )
}

fn pod_security_context() -> Attributes {
    let seccomp_profile = Attributes::new()
        .with(
            "localhost_profile",
            Attribute::string("A profile defined in a file on the node."),
        )
        .with(
            "type",
            Attribute::string("Which kind of seccomp profile will be applied.")
                .required()
                .validate(Validator::OneOf(&["Localhost", "RuntimeDefault", "Unconfined"])),
        );
    let sysctl = Attributes::new()
        .with("name", Attribute::string("Name of a property to set.").required())
        .with("value", Attribute::string("Value of a property to set.").required());

    Attributes::new()
        .with(
            "fs_group",
            Attribute::int64("A special supplemental group that applies to all containers in a pod."),
        )
        .with(
            "fs_group_change_policy",
            Attribute::string("Behavior of changing ownership and permission of the volume.")
                .validate(Validator::OneOf(&["OnRootMismatch", "Always"])),
        )
        .with(
            "run_as_group",
            Attribute::int64("The GID to run the entrypoint of the container process."),
        )
        .with(
            "run_as_non_root",
            Attribute::bool("Indicates that the container must run as a non-root user."),
        )
        .with(
            "run_as_user",
            Attribute::int64("The UID to run the entrypoint of the container process."),
        )
        .with(
            "seccomp_profile",
            Attribute::single_nested(seccomp_profile, "The seccomp options to use by the containers in this pod."),
        )
        .with(
            "supplemental_groups",
            Attribute::int64_list("Groups applied to the first process run in each container."),
        )
        .with(
            "sysctls",
            Attribute::list_nested(sysctl, "Namespaced sysctls used for the pod."),
        )
}

fn toleration() -> Attributes {
    Attributes::new()
        .with(
            "effect",
            Attribute::string("Taint effect to match.")
                .validate(Validator::OneOf(&["NoSchedule", "PreferNoSchedule", "NoExecute"])),
        )
        .with("key", Attribute::string("Taint key that the toleration applies to."))
        .with(
            "operator",
            Attribute::string("Represents a key's relationship to the value.")
                .validate(Validator::OneOf(&["Exists", "Equal"])),
        )
        .with(
            "toleration_seconds",
            Attribute::int64("Period of time the toleration tolerates the taint."),
        )
        .with("value", Attribute::string("Taint value the toleration matches to."))
}

fn topology_spread_constraint() -> Attributes {
    Attributes::new()
        .with(
            "label_selector",
            Attribute::single_nested(label_selector(), "Used to find matching pods."),
        )
        .with(
            "max_skew",
            Attribute::int64("Degree to which pods may be unevenly distributed.")
                .required()
                .validate(Validator::Int64AtLeast(1)),
        )
        .with(
            "min_domains",
            Attribute::int64("Minimum number of eligible domains.").validate(Validator::Int64AtLeast(1)),
        )
        .with(
            "topology_key",
            Attribute::string("The key of node labels.").required(),
        )
        .with(
            "when_unsatisfiable",
            Attribute::string("How to deal with a pod if it doesn't satisfy the spread constraint.")
                .required()
                .validate(Validator::OneOf(&["DoNotSchedule", "ScheduleAnyway"])),
        )
}

pub fn container() -> Attributes {
    Attributes::new()
        .with(
            "name",
            Attribute::string("Name of the container specified as a DNS_LABEL.")
                .required()
                .validate(Validator::LabelName),
        )
        .with("image", Attribute::string("Container image name."))
        .with(
            "image_pull_policy",
            Attribute::string("Image pull policy.")
                .validate(Validator::OneOf(&["Always", "Never", "IfNotPresent"])),
        )
        .with("command", Attribute::string_list("Entrypoint array."))
        .with("args", Attribute::string_list("Arguments to the entrypoint."))
        .with(
            "working_dir",
            Attribute::string("Container's working directory."),
        )
        .with(
            "ports",
            Attribute::list_nested(container_port(), "List of ports to expose from the container."),
        )
        .with(
            "env",
            Attribute::list_nested(env_var(), "List of environment variables to set in the container."),
        )
        .with(
            "env_from",
            Attribute::list_nested(env_from_source(), "List of sources to populate environment variables in the container."),
        )
        .with(
            "resources",
            Attribute::single_nested(resource_requirements(), "Compute resources required by this container."),
        )
        .with(
            "volume_mounts",
            Attribute::list_nested(volume_mount(), "Pod volumes to mount into the container's filesystem."),
        )
        .with(
            "liveness_probe",
            Attribute::single_nested(probe(), "Periodic probe of container liveness."),
        )
        .with(
            "readiness_probe",
            Attribute::single_nested(probe(), "Periodic probe of container service readiness."),
        )
        .with(
            "startup_probe",
            Attribute::single_nested(probe(), "Indicates that the Pod has successfully initialized."),
        )
        .with(
            "lifecycle",
            Attribute::single_nested(lifecycle(), "Actions that the management system should take in response to container lifecycle events."),
        )
        .with(
            "security_context",
            Attribute::single_nested(security_context(), "Security options the container should be run with."),
        )
        .with(
            "stdin",
            Attribute::bool("Whether this container should allocate a buffer for stdin."),
        )
        .with(
            "stdin_once",
            Attribute::bool("Whether the container runtime should close the stdin channel after it has been opened by a single attach."),
        )
        .with(
            "termination_message_path",
            Attribute::string("File to which the container's termination message will be written."),
        )
        .with(
            "termination_message_policy",
            Attribute::string("How the termination message should be populated.")
                .validate(Validator::OneOf(&["File", "FallbackToLogsOnError"])),
        )
        .with(
            "tty",
            Attribute::bool("Whether this container should allocate a TTY for itself."),
        )
}

fn container_port() -> Attributes {
    Attributes::new()
        .with(
            "container_port",
            Attribute::int64("Number of port to expose on the pod's IP address.")
                .required()
                .validate(Validator::Port),
        )
        .with(
            "host_ip",
            Attribute::string("What host IP to bind the external port to.").k8s_name("hostIP"),
        )
        .with(
            "host_port",
            Attribute::int64("Number of port to expose on the host.").validate(Validator::Port),
        )
        .with(
            "name",
            Attribute::string("Name that can be referred to by services.").validate(Validator::Port),
        )
        .with(
            "protocol",
            Attribute::string("Protocol for port.").validate(Validator::OneOf(&["TCP", "UDP", "SCTP"])),
        )
}

fn env_var() -> Attributes {
    let key_selector = || {
        Attributes::new()
            .with("key", Attribute::string("The key to select.").required())
            .with("name", Attribute::string("Name of the referent."))
            .with(
                "optional",
                Attribute::bool("Specify whether the referent or its key must be defined."),
            )
    };
    let value_from = Attributes::new()
        .with(
            "config_map_key_ref",
            Attribute::single_nested(key_selector(), "Selects a key of a ConfigMap."),
        )
        .with(
            "field_ref",
            Attribute::single_nested(object_field_selector(), "Selects a field of the pod."),
        )
        .with(
            "resource_field_ref",
            Attribute::single_nested(resource_field_selector(), "Selects a resource of the container."),
        )
        .with(
            "secret_key_ref",
            Attribute::single_nested(key_selector(), "Selects a key of a secret in the pod's namespace."),
        );

    Attributes::new()
        .with(
            "name",
            Attribute::string("Name of the environment variable.").required(),
        )
        .with("value", Attribute::string("Variable value."))
        .with(
            "value_from",
            Attribute::single_nested(value_from, "Source for the environment variable's value."),
        )
}

fn resource_field_selector() -> Attributes {
    Attributes::new()
        .with(
            "container_name",
            Attribute::string("Container name, required for volumes."),
        )
        .with(
            "divisor",
            Attribute::string("Output format of the exposed resources."),
        )
        .with("resource", Attribute::string("Resource to select.").required())
}

fn env_from_source() -> Attributes {
    let reference = || {
        Attributes::new()
            .with("name", Attribute::string("Name of the referent."))
            .with(
                "optional",
                Attribute::bool("Specify whether the referent must be defined."),
            )
    };

    Attributes::new()
        .with(
            "config_map_ref",
            Attribute::single_nested(reference(), "The ConfigMap to select from."),
        )
        .with(
            "prefix",
            Attribute::string("Identifier to prepend to each key in the source."),
        )
        .with(
            "secret_ref",
            Attribute::single_nested(reference(), "The Secret to select from."),
        )
}

pub fn resource_requirements() -> Attributes {
    Attributes::new()
        .with(
            "limits",
            Attribute::string_map("Maximum amount of compute resources allowed."),
        )
        .with(
            "requests",
            Attribute::string_map("Minimum amount of compute resources required."),
        )
}

fn volume_mount() -> Attributes {
    Attributes::new()
        .with(
            "mount_path",
            Attribute::string("Path within the container at which the volume should be mounted.").required(),
        )
        .with(
            "mount_propagation",
            Attribute::string("How mounts are propagated from the host to container and the other way around.")
                .validate(Validator::OneOf(&["None", "HostToContainer", "Bidirectional"])),
        )
        .with(
            "name",
            Attribute::string("This must match the Name of a Volume.").required(),
        )
        .with(
            "read_only",
            Attribute::bool("Mounted read-only if true, read-write otherwise."),
        )
        .with(
            "sub_path",
            Attribute::string("Path within the volume from which the container's volume should be mounted."),
        )
        .with(
            "sub_path_expr",
            Attribute::string("Expanded path within the volume from which the container's volume should be mounted."),
        )
}

fn exec_action() -> Attributes {
    Attributes::new().with(
        "command",
        Attribute::string_list("Command line to execute inside the container."),
    )
}

fn http_get_action() -> Attributes {
    let header = Attributes::new()
        .with("name", Attribute::string("The header field name.").required())
        .with("value", Attribute::string("The header field value.").required());

    Attributes::new()
        .with(
            "host",
            Attribute::string("Host name to connect to, defaults to the pod IP."),
        )
        .with(
            "http_headers",
            Attribute::list_nested(header, "Custom headers to set in the request."),
        )
        .with("path", Attribute::string("Path to access on the HTTP server."))
        .with(
            "port",
            Attribute::int_or_string("Name or number of the port to access on the container.")
                .required()
                .validate(Validator::Port),
        )
        .with(
            "scheme",
            Attribute::string("Scheme to use for connecting to the host.")
                .validate(Validator::OneOf(&["HTTP", "HTTPS"])),
        )
}

fn tcp_socket_action() -> Attributes {
    Attributes::new()
        .with(
            "host",
            Attribute::string("Optional: Host name to connect to, defaults to the pod IP."),
        )
        .with(
            "port",
            Attribute::int_or_string("Number or name of the port to access on the container.")
                .required()
                .validate(Validator::Port),
        )
}

fn probe() -> Attributes {
    let grpc = Attributes::new()
        .with(
            "port",
            Attribute::int64("Port number of the gRPC service.")
                .required()
                .validate(Validator::Port),
        )
        .with(
            "service",
            Attribute::string("Name of the service to place in the gRPC HealthCheckRequest."),
        );

    Attributes::new()
        .with(
            "exec",
            Attribute::single_nested(exec_action(), "Exec specifies the action to take."),
        )
        .with(
            "failure_threshold",
            Attribute::int64("Minimum consecutive failures for the probe to be considered failed.")
                .validate(Validator::Int64AtLeast(1)),
        )
        .with(
            "grpc",
            Attribute::single_nested(grpc, "GRPC specifies an action involving a GRPC port."),
        )
        .with(
            "http_get",
            Attribute::single_nested(http_get_action(), "HTTPGet specifies the http request to perform."),
        )
        .with(
            "initial_delay_seconds",
            Attribute::int64("Number of seconds after the container has started before probes are initiated.")
                .validate(Validator::Int64AtLeast(0)),
        )
        .with(
            "period_seconds",
            Attribute::int64("How often (in seconds) to perform the probe.")
                .validate(Validator::Int64AtLeast(1)),
        )
        .with(
            "success_threshold",
            Attribute::int64("Minimum consecutive successes for the probe to be considered successful.")
                .validate(Validator::Int64AtLeast(1)),
        )
        .with(
            "tcp_socket",
            Attribute::single_nested(tcp_socket_action(), "TCPSocket specifies an action involving a TCP port."),
        )
        .with(
            "termination_grace_period_seconds",
            Attribute::int64("Duration in seconds the pod needs to terminate gracefully upon probe failure.")
                .validate(Validator::Int64AtLeast(1)),
        )
        .with(
            "timeout_seconds",
            Attribute::int64("Number of seconds after which the probe times out.")
                .validate(Validator::Int64AtLeast(1)),
        )
}

fn lifecycle() -> Attributes {
    let handler = || {
        Attributes::new()
            .with(
                "exec",
                Attribute::single_nested(exec_action(), "Exec specifies the action to take."),
            )
            .with(
                "http_get",
                Attribute::single_nested(http_get_action(), "HTTPGet specifies the http request to perform."),
            )
            .with(
                "tcp_socket",
                Attribute::single_nested(tcp_socket_action(), "TCPSocket specifies an action involving a TCP port."),
            )
    };

    Attributes::new()
        .with(
            "post_start",
            Attribute::single_nested(handler(), "Called immediately after a container is created."),
        )
        .with(
            "pre_stop",
            Attribute::single_nested(handler(), "Called immediately before a container is terminated."),
        )
}

fn security_context() -> Attributes {
    let capabilities = Attributes::new()
        .with("add", Attribute::string_list("Added capabilities."))
        .with("drop", Attribute::string_list("Removed capabilities."));

    Attributes::new()
        .with(
            "allow_privilege_escalation",
            Attribute::bool("Whether a process can gain more privileges than its parent process."),
        )
        .with(
            "capabilities",
            Attribute::single_nested(capabilities, "The capabilities to add/drop when running containers."),
        )
        .with(
            "privileged",
            Attribute::bool("Run container in privileged mode."),
        )
        .with(
            "read_only_root_filesystem",
            Attribute::bool("Whether this container has a read-only root filesystem."),
        )
        .with(
            "run_as_group",
            Attribute::int64("The GID to run the entrypoint of the container process."),
        )
        .with(
            "run_as_non_root",
            Attribute::bool("Indicates that the container must run as a non-root user."),
        )
        .with(
            "run_as_user",
            Attribute::int64("The UID to run the entrypoint of the container process."),
        )
}

fn key_to_path() -> Attributes {
    Attributes::new()
        .with("key", Attribute::string("The key to project.").required())
        .with(
            "mode",
            Attribute::int64("Mode bits used to set permissions on this file."),
        )
        .with(
            "path",
            Attribute::string("The relative path of the file to map the key to.").required(),
        )
}

fn volume() -> Attributes {
    let config_map = Attributes::new()
        .with(
            "default_mode",
            Attribute::int64("Mode bits used to set permissions on created files by default."),
        )
        .with(
            "items",
            Attribute::list_nested(key_to_path(), "Keys projected into the volume."),
        )
        .with("name", Attribute::string("Name of the referent."))
        .with(
            "optional",
            Attribute::bool("Specify whether the ConfigMap or its keys must be defined."),
        );
    let downward_file = Attributes::new()
        .with(
            "field_ref",
            Attribute::single_nested(object_field_selector(), "Selects a field of the pod."),
        )
        .with(
            "mode",
            Attribute::int64("Mode bits used to set permissions on this file."),
        )
        .with(
            "path",
            Attribute::string("Relative path name of the file to be created.").required(),
        )
        .with(
            "resource_field_ref",
            Attribute::single_nested(resource_field_selector(), "Selects a resource of the container."),
        );
    let downward_api = Attributes::new()
        .with(
            "default_mode",
            Attribute::int64("Mode bits to use on created files by default."),
        )
        .with(
            "items",
            Attribute::list_nested(downward_file, "List of downward API volume files."),
        );
    let empty_dir = Attributes::new()
        .with(
            "medium",
            Attribute::string("What type of storage medium should back this directory."),
        )
        .with(
            "size_limit",
            Attribute::string("Total amount of local storage required for this EmptyDir volume."),
        );
    let host_path = Attributes::new()
        .with(
            "path",
            Attribute::string("Path of the directory on the host.").required(),
        )
        .with("type", Attribute::string("Type for HostPath Volume."));
    let nfs = Attributes::new()
        .with("path", Attribute::string("Path exported by the NFS server.").required())
        .with(
            "read_only",
            Attribute::bool("Force the NFS export to be mounted with read-only permissions."),
        )
        .with(
            "server",
            Attribute::string("Hostname or IP address of the NFS server.").required(),
        );
    let persistent_volume_claim = Attributes::new()
        .with(
            "claim_name",
            Attribute::string("Name of a PersistentVolumeClaim in the same namespace as the pod.")
                .required()
                .validate(Validator::Name),
        )
        .with(
            "read_only",
            Attribute::bool("Force the ReadOnly setting in VolumeMounts."),
        );
    let secret = Attributes::new()
        .with(
            "default_mode",
            Attribute::int64("Mode bits used to set permissions on created files by default."),
        )
        .with(
            "items",
            Attribute::list_nested(key_to_path(), "Keys projected into the volume."),
        )
        .with(
            "optional",
            Attribute::bool("Specify whether the Secret or its keys must be defined."),
        )
        .with(
            "secret_name",
            Attribute::string("Name of the secret in the pod's namespace to use.")
                .validate(Validator::Name),
        );

    Attributes::new()
        .with(
            "name",
            Attribute::string("Name of the volume, must be a DNS_LABEL.")
                .required()
                .validate(Validator::LabelName),
        )
        .with(
            "config_map",
            Attribute::single_nested(config_map, "ConfigMap that should populate this volume."),
        )
        .with(
            "downward_api",
            Attribute::single_nested(downward_api, "Downward API about the pod that should populate this volume.")
                .k8s_name("downwardAPI"),
        )
        .with(
            "empty_dir",
            Attribute::single_nested(empty_dir, "Temporary directory that shares a pod's lifetime."),
        )
        .with(
            "host_path",
            Attribute::single_nested(host_path, "Pre-existing file or directory on the host machine."),
        )
        .with(
            "nfs",
            Attribute::single_nested(nfs, "NFS mount on the host that shares a pod's lifetime."),
        )
        .with(
            "persistent_volume_claim",
            Attribute::single_nested(
                persistent_volume_claim,
                "Reference to a PersistentVolumeClaim in the same namespace.",
            ),
        )
        .with(
            "secret",
            Attribute::single_nested(secret, "Secret that should populate this volume."),
        )
}
