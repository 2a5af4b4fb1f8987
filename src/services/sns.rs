use super::required;

service! {
    /// Statement builder for Amazon SNS (`sns`).
    pub struct Sns;
    prefix: "sns",
    name: "Amazon SNS",
    api_reference: "https://docs.aws.amazon.com/sns/latest/api/",
    complete: true,

    actions {
        add_permission: "AddPermission", PermissionsManagement,
            "Grants permission to add a statement to a topic's access control policy"
            => .resources(&[required("topic")]);
        check_if_phone_number_is_opted_out: "CheckIfPhoneNumberIsOptedOut", Read,
            "Grants permission to check whether a phone number has opted out of receiving SMS messages";
        confirm_subscription: "ConfirmSubscription", Write,
            "Grants permission to verify an endpoint owner's intent to receive messages"
            => .resources(&[required("topic")]);
        create_platform_application: "CreatePlatformApplication", Write,
            "Grants permission to create a platform application object for a supported push notification service";
        create_platform_endpoint: "CreatePlatformEndpoint", Write,
            "Grants permission to create an endpoint for a device and mobile app on a supported push notification service";
        create_sms_sandbox_phone_number: "CreateSMSSandboxPhoneNumber", Write,
            "Grants permission to add a destination phone number and send a one-time password to it";
        create_topic: "CreateTopic", Write,
            "Grants permission to create a topic to which notifications can be published"
            => .resources(&[required("topic")]).conditions(&["aws:RequestTag/${TagKey}", "aws:TagKeys"]);
        delete_endpoint: "DeleteEndpoint", Write,
            "Grants permission to delete the endpoint for a device and mobile app";
        delete_platform_application: "DeletePlatformApplication", Write,
            "Grants permission to delete a platform application object";
        delete_sms_sandbox_phone_number: "DeleteSMSSandboxPhoneNumber", Write,
            "Grants permission to delete a verified or pending destination phone number";
        delete_topic: "DeleteTopic", Write,
            "Grants permission to delete a topic and all its subscriptions"
            => .resources(&[required("topic")]);
        get_data_protection_policy: "GetDataProtectionPolicy", Read,
            "Grants permission to retrieve the data protection policy of a topic"
            => .resources(&[required("topic")]);
        get_endpoint_attributes: "GetEndpointAttributes", Read,
            "Grants permission to retrieve the endpoint attributes for a device on a supported push notification service";
        get_platform_application_attributes: "GetPlatformApplicationAttributes", Read,
            "Grants permission to retrieve the attributes of a platform application object";
        get_sms_attributes: "GetSMSAttributes", Read,
            "Grants permission to return the settings for sending SMS messages from your account";
        get_sms_sandbox_account_status: "GetSMSSandboxAccountStatus", Read,
            "Grants permission to retrieve the sandbox status for the calling account in the target region";
        get_subscription_attributes: "GetSubscriptionAttributes", Read,
            "Grants permission to return all of the properties of a subscription";
        get_topic_attributes: "GetTopicAttributes", Read,
            "Grants permission to return all of the properties of a topic"
            => .resources(&[required("topic")]);
        list_endpoints_by_platform_application: "ListEndpointsByPlatformApplication", List,
            "Grants permission to list the endpoints and endpoint attributes for devices in a supported push notification service";
        list_origination_numbers: "ListOriginationNumbers", List,
            "Grants permission to list all origination numbers and their metadata";
        list_phone_numbers_opted_out: "ListPhoneNumbersOptedOut", Read,
            "Grants permission to return a list of phone numbers that are opted out of receiving SMS messages";
        list_platform_applications: "ListPlatformApplications", List,
            "Grants permission to list the platform application objects for the supported push notification services";
        list_sms_sandbox_phone_numbers: "ListSMSSandboxPhoneNumbers", List,
            "Grants permission to list the calling account's pending and verified destination phone numbers";
        list_subscriptions: "ListSubscriptions", List,
            "Grants permission to return a list of the requester's subscriptions";
        list_subscriptions_by_topic: "ListSubscriptionsByTopic", List,
            "Grants permission to return a list of the subscriptions to a specific topic"
            => .resources(&[required("topic")]);
        list_tags_for_resource: "ListTagsForResource", Read,
            "Grants permission to list all tags added to the specified topic"
            => .resources(&[required("topic")]);
        list_topics: "ListTopics", List,
            "Grants permission to return a list of the requester's topics";
        opt_in_phone_number: "OptInPhoneNumber", Write,
            "Grants permission to opt in a phone number that is currently opted out";
        publish: "Publish", Write,
            "Grants permission to send a message to all of a topic's subscribed endpoints"
            => .resources(&[required("topic")]);
        put_data_protection_policy: "PutDataProtectionPolicy", Write,
            "Grants permission to add or update the data protection policy of a topic"
            => .resources(&[required("topic")]);
        remove_permission: "RemovePermission", PermissionsManagement,
            "Grants permission to remove a statement from a topic's access control policy"
            => .resources(&[required("topic")]);
        set_endpoint_attributes: "SetEndpointAttributes", Write,
            "Grants permission to set the attributes for an endpoint for a device on a supported push notification service";
        set_platform_application_attributes: "SetPlatformApplicationAttributes", Write,
            "Grants permission to set the attributes of the platform application object";
        set_sms_attributes: "SetSMSAttributes", Write,
            "Grants permission to set the default settings for sending SMS messages and receiving daily SMS usage reports";
        set_subscription_attributes: "SetSubscriptionAttributes", Write,
            "Grants permission to allow a subscription owner to set an attribute of the subscription to a new value";
        set_topic_attributes: "SetTopicAttributes", PermissionsManagement,
            "Grants permission to allow a topic owner to set an attribute of the topic to a new value"
            => .resources(&[required("topic")]);
        subscribe: "Subscribe", Write,
            "Grants permission to prepare to subscribe an endpoint by sending the endpoint a confirmation message"
            => .resources(&[required("topic")]).conditions(&["sns:Endpoint", "sns:Protocol"]);
        tag_resource: "TagResource", Tagging,
            "Grants permission to add tags to the specified topic"
            => .resources(&[required("topic")]).conditions(&["aws:TagKeys", "aws:RequestTag/${TagKey}"]);
        unsubscribe: "Unsubscribe", Write,
            "Grants permission to delete a subscription";
        untag_resource: "UntagResource", Tagging,
            "Grants permission to remove tags from the specified topic"
            => .resources(&[required("topic")]).conditions(&["aws:TagKeys"]);
        verify_sms_sandbox_phone_number: "VerifySMSSandboxPhoneNumber", Write,
            "Grants permission to verify a destination phone number with a one-time password";
    }

    resources {
        on_topic: "topic", "arn:${Partition}:sns:${Region}:${Account}:${TopicName}" (topic_name: "TopicName")
            ["aws:ResourceTag/${TagKey}"];
    }

    conditions {
        if_endpoint: "sns:Endpoint", String,
            "Filters access by the URL, email address, or ARN from a Subscribe request or a previously confirmed subscription";
        if_protocol: "sns:Protocol", String,
            "Filters access by the protocol value from a Subscribe request or a previously confirmed subscription";
    }

    tagged_conditions {}
}
