use super::{optional, required};

service! {
    /// Statement builder for AWS Global Accelerator (`globalaccelerator`).
    ///
    /// Global Accelerator resources are global, so their ARNs have no region.
    pub struct GlobalAccelerator;
    prefix: "globalaccelerator",
    name: "AWS Global Accelerator",
    api_reference: "https://docs.aws.amazon.com/global-accelerator/latest/api/",
    complete: true,

    actions {
        add_custom_routing_endpoints: "AddCustomRoutingEndpoints", Write,
            "Grants permission to add a virtual private cloud (VPC) subnet endpoint to a custom routing accelerator endpoint group"
            => .resources(&[required("endpointgroup")]);
        add_endpoints: "AddEndpoints", Write,
            "Grants permission to add an endpoint to a standard accelerator endpoint group"
            => .resources(&[required("endpointgroup")]);
        advertise_byoip_cidr: "AdvertiseByoipCidr", Write,
            "Grants permission to advertise an IPv4 address range that is provisioned for use with your accelerator through bring your own IP addresses (BYOIP)";
        allow_custom_routing_traffic: "AllowCustomRoutingTraffic", Write,
            "Grants permission to allow custom routing of user traffic to a private destination IP:PORT in a specific VPC subnet"
            => .resources(&[required("endpointgroup")]);
        create_accelerator: "CreateAccelerator", Write,
            "Grants permission to create a standard accelerator"
            => .conditions(&["aws:RequestTag/${TagKey}", "aws:TagKeys"]);
        create_cross_account_attachment: "CreateCrossAccountAttachment", Write,
            "Grants permission to create a cross-account attachment"
            => .conditions(&["aws:RequestTag/${TagKey}", "aws:TagKeys"]);
        create_custom_routing_accelerator: "CreateCustomRoutingAccelerator", Write,
            "Grants permission to create a custom routing accelerator"
            => .conditions(&["aws:RequestTag/${TagKey}", "aws:TagKeys"]);
        create_custom_routing_endpoint_group: "CreateCustomRoutingEndpointGroup", Write,
            "Grants permission to create an endpoint group for the specified listener for a custom routing accelerator"
            => .resources(&[required("listener")]);
        create_custom_routing_listener: "CreateCustomRoutingListener", Write,
            "Grants permission to create a listener to process inbound connections from clients to a custom routing accelerator"
            => .resources(&[required("accelerator")]);
        create_endpoint_group: "CreateEndpointGroup", Write,
            "Grants permission to add an endpoint group to a standard accelerator listener"
            => .resources(&[required("listener")]);
        create_listener: "CreateListener", Write,
            "Grants permission to add a listener to a standard accelerator"
            => .resources(&[required("accelerator")]);
        delete_accelerator: "DeleteAccelerator", Write,
            "Grants permission to delete a standard accelerator"
            => .resources(&[required("accelerator")]);
        delete_cross_account_attachment: "DeleteCrossAccountAttachment", Write,
            "Grants permission to delete a cross-account attachment"
            => .resources(&[required("attachment")]);
        delete_custom_routing_accelerator: "DeleteCustomRoutingAccelerator", Write,
            "Grants permission to delete a custom routing accelerator"
            => .resources(&[required("accelerator")]);
        delete_custom_routing_endpoint_group: "DeleteCustomRoutingEndpointGroup", Write,
            "Grants permission to delete an endpoint group from a listener for a custom routing accelerator"
            => .resources(&[required("endpointgroup")]);
        delete_custom_routing_listener: "DeleteCustomRoutingListener", Write,
            "Grants permission to delete a listener for a custom routing accelerator"
            => .resources(&[required("listener")]);
        delete_endpoint_group: "DeleteEndpointGroup", Write,
            "Grants permission to delete an endpoint group associated with a standard accelerator listener"
            => .resources(&[required("endpointgroup")]);
        delete_listener: "DeleteListener", Write,
            "Grants permission to delete a listener from a standard accelerator"
            => .resources(&[required("listener")]);
        deny_custom_routing_traffic: "DenyCustomRoutingTraffic", Write,
            "Grants permission to disallow custom routing of user traffic to a private destination IP:PORT in a specific VPC subnet"
            => .resources(&[required("endpointgroup")]);
        deprovision_byoip_cidr: "DeprovisionByoipCidr", Write,
            "Grants permission to release the specified address range that you provisioned for use with your accelerator through bring your own IP addresses (BYOIP)";
        describe_accelerator: "DescribeAccelerator", Read,
            "Grants permission to describe a standard accelerator"
            => .resources(&[required("accelerator")]);
        describe_accelerator_attributes: "DescribeAcceleratorAttributes", Read,
            "Grants permission to describe a standard accelerator attributes"
            => .resources(&[required("accelerator")]);
        describe_cross_account_attachment: "DescribeCrossAccountAttachment", Read,
            "Grants permission to describe a cross-account attachment"
            => .resources(&[required("attachment")]);
        describe_custom_routing_accelerator: "DescribeCustomRoutingAccelerator", Read,
            "Grants permission to describe a custom routing accelerator"
            => .resources(&[required("accelerator")]);
        describe_custom_routing_accelerator_attributes: "DescribeCustomRoutingAcceleratorAttributes", Read,
            "Grants permission to describe the attributes of a custom routing accelerator"
            => .resources(&[required("accelerator")]);
        describe_custom_routing_endpoint_group: "DescribeCustomRoutingEndpointGroup", Read,
            "Grants permission to describe an endpoint group for a custom routing accelerator"
            => .resources(&[required("endpointgroup")]);
        describe_custom_routing_listener: "DescribeCustomRoutingListener", Read,
            "Grants permission to describe a listener for a custom routing accelerator"
            => .resources(&[required("listener")]);
        describe_endpoint_group: "DescribeEndpointGroup", Read,
            "Grants permission to describe a standard accelerator endpoint group"
            => .resources(&[required("endpointgroup")]);
        describe_listener: "DescribeListener", Read,
            "Grants permission to describe a standard accelerator listener"
            => .resources(&[required("listener")]);
        list_accelerators: "ListAccelerators", List,
            "Grants permission to list all standard accelerators";
        list_byoip_cidrs: "ListByoipCidrs", List,
            "Grants permission to list the BYOIP cidrs";
        list_cross_account_attachments: "ListCrossAccountAttachments", List,
            "Grants permission to list all cross-account attachments";
        list_cross_account_resource_accounts: "ListCrossAccountResourceAccounts", List,
            "Grants permission to list accounts with cross-account resources";
        list_cross_account_resources: "ListCrossAccountResources", List,
            "Grants permission to list cross-account resources";
        list_custom_routing_accelerators: "ListCustomRoutingAccelerators", List,
            "Grants permission to list the custom routing accelerators for an AWS account";
        list_custom_routing_endpoint_groups: "ListCustomRoutingEndpointGroups", List,
            "Grants permission to list the endpoint groups that are associated with a listener for a custom routing accelerator"
            => .resources(&[required("listener")]);
        list_custom_routing_listeners: "ListCustomRoutingListeners", List,
            "Grants permission to list the listeners for a custom routing accelerator"
            => .resources(&[required("accelerator")]);
        list_custom_routing_port_mappings: "ListCustomRoutingPortMappings", List,
            "Grants permission to list the port mappings for a custom routing accelerator"
            => .resources(&[required("accelerator")]);
        list_custom_routing_port_mappings_by_destination: "ListCustomRoutingPortMappingsByDestination", List,
            "Grants permission to list the port mappings for a specific endpoint IP address (a destination) in a subnet";
        list_endpoint_groups: "ListEndpointGroups", List,
            "Grants permission to list all endpoint groups associated with a standard accelerator listener"
            => .resources(&[required("listener")]);
        list_listeners: "ListListeners", List,
            "Grants permission to list all listeners associated with a standard accelerator"
            => .resources(&[required("accelerator")]);
        list_tags_for_resource: "ListTagsForResource", Read,
            "Grants permission to list tags for a globalaccelerator resource"
            => .resources(&[optional("accelerator"), optional("attachment")]);
        provision_byoip_cidr: "ProvisionByoipCidr", Write,
            "Grants permission to provision an address range for use with your accelerator through bring your own IP addresses (BYOIP)";
        remove_custom_routing_endpoints: "RemoveCustomRoutingEndpoints", Write,
            "Grants permission to remove virtual private cloud (VPC) subnet endpoints from a custom routing accelerator endpoint group"
            => .resources(&[required("endpointgroup")]);
        remove_endpoints: "RemoveEndpoints", Write,
            "Grants permission to remove endpoints from a standard accelerator endpoint group"
            => .resources(&[required("endpointgroup")]);
        tag_resource: "TagResource", Tagging,
            "Grants permission to add tags to a globalaccelerator resource"
            => .resources(&[optional("accelerator"), optional("attachment")])
               .conditions(&["aws:RequestTag/${TagKey}", "aws:TagKeys"]);
        untag_resource: "UntagResource", Tagging,
            "Grants permission to remove tags from a globalaccelerator resource"
            => .resources(&[optional("accelerator"), optional("attachment")]).conditions(&["aws:TagKeys"]);
        update_accelerator: "UpdateAccelerator", Write,
            "Grants permission to update a standard accelerator"
            => .resources(&[required("accelerator")]);
        update_accelerator_attributes: "UpdateAcceleratorAttributes", Write,
            "Grants permission to update a standard accelerator attributes"
            => .resources(&[required("accelerator")]);
        update_cross_account_attachment: "UpdateCrossAccountAttachment", Write,
            "Grants permission to update a cross-account attachment"
            => .resources(&[required("attachment")]);
        update_custom_routing_accelerator: "UpdateCustomRoutingAccelerator", Write,
            "Grants permission to update a custom routing accelerator"
            => .resources(&[required("accelerator")]);
        update_custom_routing_accelerator_attributes: "UpdateCustomRoutingAcceleratorAttributes", Write,
            "Grants permission to update the attributes for a custom routing accelerator"
            => .resources(&[required("accelerator")]);
        update_custom_routing_listener: "UpdateCustomRoutingListener", Write,
            "Grants permission to update a listener for a custom routing accelerator"
            => .resources(&[required("listener")]);
        update_endpoint_group: "UpdateEndpointGroup", Write,
            "Grants permission to update an endpoint group on a standard accelerator listener"
            => .resources(&[required("endpointgroup")]);
        update_listener: "UpdateListener", Write,
            "Grants permission to update a listener on a standard accelerator"
            => .resources(&[required("listener")]);
        withdraw_byoip_cidr: "WithdrawByoipCidr", Write,
            "Grants permission to stop advertising a BYOIP IPv4 address";
    }

    resources {
        on_accelerator: "accelerator", "arn:${Partition}:globalaccelerator::${Account}:accelerator/${ResourceId}"
            (resource_id: "ResourceId")
            ["aws:ResourceTag/${TagKey}"];
        on_listener: "listener",
            "arn:${Partition}:globalaccelerator::${Account}:accelerator/${ResourceId}/listener/${ListenerId}"
            (resource_id: "ResourceId", listener_id: "ListenerId")
            [];
        on_endpointgroup: "endpointgroup",
            "arn:${Partition}:globalaccelerator::${Account}:accelerator/${ResourceId}/listener/${ListenerId}/endpoint-group/${EndpointGroupId}"
            (resource_id: "ResourceId", listener_id: "ListenerId", endpoint_group_id: "EndpointGroupId")
            [];
        on_attachment: "attachment", "arn:${Partition}:globalaccelerator::${Account}:attachment/${ResourceId}"
            (resource_id: "ResourceId")
            ["aws:ResourceTag/${TagKey}"];
    }

    conditions {}

    tagged_conditions {}
}

#[cfg(test)]
mod tests {
    use {
        super::{GlobalAccelerator, CATALOG},
        crate::{catalog::AccessLevel, BuilderError, PolicyStatementBuilder},
        indoc::indoc,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_accelerator_resources() {
        let json = GlobalAccelerator::new()
            .in_account("123456789012")
            .in_region("us-west-2")
            .update_accelerator()
            .create_listener()
            .on_accelerator("1234abcd-abcd-1234-abcd-1234abcdefgh")
            .on_listener("1234abcd-abcd-1234-abcd-1234abcdefgh", "0123vxyz")
            .on_endpointgroup("1234abcd-abcd-1234-abcd-1234abcdefgh", "0123vxyz", "098765zyxwvu")
            .if_aws_request_tag("team", "networking", None)
            .to_json()
            .unwrap();

        assert_eq!(
            json,
            indoc! { r#"
            {
                "Effect": "Allow",
                "Action": [
                    "globalaccelerator:UpdateAccelerator",
                    "globalaccelerator:CreateListener"
                ],
                "Resource": [
                    "arn:aws:globalaccelerator::123456789012:accelerator/1234abcd-abcd-1234-abcd-1234abcdefgh",
                    "arn:aws:globalaccelerator::123456789012:accelerator/1234abcd-abcd-1234-abcd-1234abcdefgh/listener/0123vxyz",
                    "arn:aws:globalaccelerator::123456789012:accelerator/1234abcd-abcd-1234-abcd-1234abcdefgh/listener/0123vxyz/endpoint-group/098765zyxwvu"
                ],
                "Condition": {
                    "StringLike": {
                        "aws:RequestTag/team": "networking"
                    }
                }
            }"# }
        );
    }

    #[test_log::test]
    fn test_read_actions_compact() {
        let statement = GlobalAccelerator::new().all_read_actions().compact().to_statement().unwrap();
        let actions: Vec<String> = statement.action().unwrap().iter().map(|a| a.to_string()).collect();
        assert_eq!(actions, vec!["globalaccelerator:Des*", "globalaccelerator:ListT*"]);
    }

    #[test_log::test]
    fn test_matching_actions() {
        let statement = GlobalAccelerator::new().all_matching_actions("/byoip/i").to_statement().unwrap();
        let actions: Vec<String> = statement.action().unwrap().iter().map(|a| a.to_string()).collect();
        assert_eq!(
            actions,
            vec![
                "globalaccelerator:AdvertiseByoipCidr",
                "globalaccelerator:DeprovisionByoipCidr",
                "globalaccelerator:ListByoipCidrs",
                "globalaccelerator:ProvisionByoipCidr",
                "globalaccelerator:WithdrawByoipCidr",
            ]
        );

        let err = GlobalAccelerator::new().all_matching_actions("(").to_statement().unwrap_err();
        assert_eq!(err, BuilderError::InvalidPattern("(".to_string()));
    }

    #[test_log::test]
    fn test_catalog() {
        assert_eq!(CATALOG.actions.len(), 56);
        assert_eq!(CATALOG.access_level_list()[&AccessLevel::Tagging], vec!["TagResource", "UntagResource"]);
        assert_eq!(
            CATALOG.action_url("CreateAccelerator").unwrap(),
            "https://docs.aws.amazon.com/global-accelerator/latest/api/API_CreateAccelerator.html"
        );
        assert_eq!(CATALOG.resource_type("endpointgroup").unwrap().condition_keys.len(), 0);
    }
}
