use super::required;

service! {
    /// Statement builder for AWS Key Management Service (`kms`).
    pub struct Kms;
    prefix: "kms",
    name: "AWS Key Management Service",
    api_reference: "https://docs.aws.amazon.com/kms/latest/APIReference/",
    complete: true,

    actions {
        cancel_key_deletion: "CancelKeyDeletion", Write,
            "Controls permission to cancel the scheduled deletion of an AWS KMS key"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        connect_custom_key_store: "ConnectCustomKeyStore", Write,
            "Controls permission to connect or reconnect a custom key store to its associated AWS CloudHSM cluster or external key manager"
            => .conditions(&["kms:CallerAccount"]);
        create_alias: "CreateAlias", Write,
            "Controls permission to create an alias for an AWS KMS key"
            => .resources(&[required("alias"), required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        create_custom_key_store: "CreateCustomKeyStore", Write,
            "Controls permission to create a custom key store"
            => .conditions(&["kms:CallerAccount"]).dependent(&["cloudhsm:DescribeClusters"]);
        create_grant: "CreateGrant", PermissionsManagement,
            "Controls permission to add a grant to an AWS KMS key"
            => .resources(&[required("key")])
               .conditions(&[
                   "kms:CallerAccount",
                   "kms:EncryptionContext/${EncryptionContextKey}",
                   "kms:EncryptionContextKeys",
                   "kms:GrantConstraintType",
                   "kms:GrantIsForAWSResource",
                   "kms:GrantOperations",
                   "kms:GranteePrincipal",
                   "kms:RetiringPrincipal",
                   "kms:ViaService",
               ]);
        create_key: "CreateKey", Write,
            "Controls permission to create an AWS KMS key that can be used to protect data keys and other sensitive information"
            => .conditions(&[
                   "aws:RequestTag/${TagKey}",
                   "aws:TagKeys",
                   "kms:BypassPolicyLockoutSafetyCheck",
                   "kms:CallerAccount",
                   "kms:KeyOrigin",
                   "kms:KeySpec",
                   "kms:KeyUsage",
                   "kms:MultiRegion",
                   "kms:MultiRegionKeyType",
                   "kms:ViaService",
               ])
               .dependent(&["kms:PutKeyPolicy", "kms:TagResource"]);
        decrypt: "Decrypt", Write,
            "Controls permission to decrypt ciphertext that was encrypted under an AWS KMS key"
            => .resources(&[required("key")])
               .conditions(&[
                   "kms:CallerAccount",
                   "kms:EncryptionAlgorithm",
                   "kms:EncryptionContext/${EncryptionContextKey}",
                   "kms:EncryptionContextKeys",
                   "kms:RecipientAttestation:ImageSha384",
                   "kms:ViaService",
               ]);
        delete_alias: "DeleteAlias", Write,
            "Controls permission to delete an alias"
            => .resources(&[required("alias"), required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        delete_custom_key_store: "DeleteCustomKeyStore", Write,
            "Controls permission to delete a custom key store"
            => .conditions(&["kms:CallerAccount"]);
        delete_imported_key_material: "DeleteImportedKeyMaterial", Write,
            "Controls permission to delete cryptographic material that you imported into an AWS KMS key"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        derive_shared_secret: "DeriveSharedSecret", Write,
            "Controls permission to derive a shared secret from an asymmetric KMS key pair"
            => .resources(&[required("key")])
               .conditions(&["kms:CallerAccount", "kms:KeyAgreementAlgorithm", "kms:ViaService"]);
        describe_custom_key_stores: "DescribeCustomKeyStores", Read,
            "Controls permission to view detailed information about custom key stores in the account and region"
            => .conditions(&["kms:CallerAccount"]);
        describe_key: "DescribeKey", Read,
            "Controls permission to view detailed information about an AWS KMS key"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        disable_key: "DisableKey", Write,
            "Controls permission to disable an AWS KMS key, which prevents it from being used in cryptographic operations"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        disable_key_rotation: "DisableKeyRotation", Write,
            "Controls permission to disable automatic rotation of a customer managed AWS KMS key"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        disconnect_custom_key_store: "DisconnectCustomKeyStore", Write,
            "Controls permission to disconnect the custom key store from its associated AWS CloudHSM cluster or external key manager"
            => .conditions(&["kms:CallerAccount"]);
        enable_key: "EnableKey", Write,
            "Controls permission to change the state of an AWS KMS key to enabled"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        enable_key_rotation: "EnableKeyRotation", Write,
            "Controls permission to enable automatic rotation of the cryptographic material in an AWS KMS key"
            => .resources(&[required("key")])
               .conditions(&["kms:CallerAccount", "kms:RotationPeriodInDays", "kms:ViaService"]);
        encrypt: "Encrypt", Write,
            "Controls permission to use the specified AWS KMS key to encrypt data and data keys"
            => .resources(&[required("key")])
               .conditions(&[
                   "kms:CallerAccount",
                   "kms:EncryptionAlgorithm",
                   "kms:EncryptionContext/${EncryptionContextKey}",
                   "kms:EncryptionContextKeys",
                   "kms:ViaService",
               ]);
        generate_data_key: "GenerateDataKey", Write,
            "Controls permission to use the AWS KMS key to generate data keys"
            => .resources(&[required("key")])
               .conditions(&[
                   "kms:CallerAccount",
                   "kms:EncryptionAlgorithm",
                   "kms:EncryptionContext/${EncryptionContextKey}",
                   "kms:EncryptionContextKeys",
                   "kms:RecipientAttestation:ImageSha384",
                   "kms:ViaService",
               ]);
        generate_data_key_pair: "GenerateDataKeyPair", Write,
            "Controls permission to use the AWS KMS key to generate data key pairs"
            => .resources(&[required("key")])
               .conditions(&[
                   "kms:CallerAccount",
                   "kms:DataKeyPairSpec",
                   "kms:EncryptionAlgorithm",
                   "kms:EncryptionContext/${EncryptionContextKey}",
                   "kms:EncryptionContextKeys",
                   "kms:ViaService",
               ]);
        generate_data_key_pair_without_plaintext: "GenerateDataKeyPairWithoutPlaintext", Write,
            "Controls permission to use the AWS KMS key to generate data key pairs without a plaintext private key"
            => .resources(&[required("key")])
               .conditions(&[
                   "kms:CallerAccount",
                   "kms:DataKeyPairSpec",
                   "kms:EncryptionAlgorithm",
                   "kms:EncryptionContext/${EncryptionContextKey}",
                   "kms:EncryptionContextKeys",
                   "kms:ViaService",
               ]);
        generate_data_key_without_plaintext: "GenerateDataKeyWithoutPlaintext", Write,
            "Controls permission to use the AWS KMS key to generate a data key that is encrypted by the AWS KMS key"
            => .resources(&[required("key")])
               .conditions(&[
                   "kms:CallerAccount",
                   "kms:EncryptionAlgorithm",
                   "kms:EncryptionContext/${EncryptionContextKey}",
                   "kms:EncryptionContextKeys",
                   "kms:ViaService",
               ]);
        generate_mac: "GenerateMac", Write,
            "Controls permission to use the AWS KMS key to generate message authentication codes"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:MacAlgorithm", "kms:ViaService"]);
        generate_random: "GenerateRandom", Write,
            "Controls permission to get a cryptographically secure random byte string from AWS KMS"
            => .conditions(&["kms:RecipientAttestation:ImageSha384"]);
        get_key_policy: "GetKeyPolicy", Read,
            "Controls permission to view the key policy for the specified AWS KMS key"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        get_key_rotation_status: "GetKeyRotationStatus", Read,
            "Controls permission to determine whether automatic key rotation is enabled on the AWS KMS key"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        get_parameters_for_import: "GetParametersForImport", Read,
            "Controls permission to get data that is required to import cryptographic material into a customer managed key"
            => .resources(&[required("key")])
               .conditions(&["kms:CallerAccount", "kms:ViaService", "kms:WrappingAlgorithm", "kms:WrappingKeySpec"]);
        get_public_key: "GetPublicKey", Read,
            "Controls permission to download the public key of an asymmetric AWS KMS key"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        import_key_material: "ImportKeyMaterial", Write,
            "Controls permission to import cryptographic material into an AWS KMS key"
            => .resources(&[required("key")])
               .conditions(&["kms:CallerAccount", "kms:ExpirationModel", "kms:ValidTo", "kms:ViaService"]);
        list_aliases: "ListAliases", List,
            "Controls permission to view the aliases that are defined in the account";
        list_grants: "ListGrants", List,
            "Controls permission to view all grants for an AWS KMS key"
            => .resources(&[required("key")])
               .conditions(&["kms:CallerAccount", "kms:GrantIsForAWSResource", "kms:ViaService"]);
        list_key_policies: "ListKeyPolicies", List,
            "Controls permission to view the names of key policies for an AWS KMS key"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        list_key_rotations: "ListKeyRotations", List,
            "Controls permission to view the list of completed key rotations for an AWS KMS key"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        list_keys: "ListKeys", List,
            "Controls permission to view the key ID and Amazon Resource Name (ARN) of all AWS KMS keys in the account";
        list_resource_tags: "ListResourceTags", Read,
            "Controls permission to view all tags that are attached to an AWS KMS key"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        list_retirable_grants: "ListRetirableGrants", List,
            "Controls permission to view grants in which the specified principal is the retiring principal";
        put_key_policy: "PutKeyPolicy", PermissionsManagement,
            "Controls permission to replace the key policy for the specified AWS KMS key"
            => .resources(&[required("key")])
               .conditions(&["kms:BypassPolicyLockoutSafetyCheck", "kms:CallerAccount", "kms:ViaService"]);
        re_encrypt_from: "ReEncryptFrom", Write,
            "Controls permission to decrypt data as part of the process that decrypts and reencrypts the data within AWS KMS"
            => .resources(&[required("key")])
               .conditions(&[
                   "kms:CallerAccount",
                   "kms:EncryptionAlgorithm",
                   "kms:EncryptionContext/${EncryptionContextKey}",
                   "kms:EncryptionContextKeys",
                   "kms:ReEncryptOnSameKey",
                   "kms:ViaService",
               ]);
        re_encrypt_to: "ReEncryptTo", Write,
            "Controls permission to encrypt data as part of the process that decrypts and reencrypts the data within AWS KMS"
            => .resources(&[required("key")])
               .conditions(&[
                   "kms:CallerAccount",
                   "kms:EncryptionAlgorithm",
                   "kms:EncryptionContext/${EncryptionContextKey}",
                   "kms:EncryptionContextKeys",
                   "kms:ReEncryptOnSameKey",
                   "kms:ViaService",
               ]);
        replicate_key: "ReplicateKey", Write,
            "Controls permission to replicate a multi-Region primary key"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:ReplicaRegion", "kms:ViaService"])
               .dependent(&["kms:CreateKey", "kms:PutKeyPolicy", "kms:TagResource"]);
        retire_grant: "RetireGrant", PermissionsManagement,
            "Controls permission to retire a grant"
            => .resources(&[required("key")]);
        revoke_grant: "RevokeGrant", PermissionsManagement,
            "Controls permission to revoke a grant, which denies permission for all operations that depend on the grant"
            => .resources(&[required("key")])
               .conditions(&["kms:CallerAccount", "kms:GrantIsForAWSResource", "kms:ViaService"]);
        rotate_key_on_demand: "RotateKeyOnDemand", Write,
            "Controls permission to invoke on-demand rotation of the cryptographic material in an AWS KMS key"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        schedule_key_deletion: "ScheduleKeyDeletion", Write,
            "Controls permission to schedule deletion of an AWS KMS key"
            => .resources(&[required("key")])
               .conditions(&["kms:CallerAccount", "kms:ScheduleKeyDeletionPendingWindowInDays", "kms:ViaService"]);
        sign: "Sign", Write,
            "Controls permission to produce a digital signature for a message"
            => .resources(&[required("key")])
               .conditions(&["kms:CallerAccount", "kms:MessageType", "kms:SigningAlgorithm", "kms:ViaService"]);
        synchronize_multi_region_key: "SynchronizeMultiRegionKey", Write,
            "Controls access to internal APIs that synchronize multi-Region keys"
            => .resources(&[required("key")]);
        tag_resource: "TagResource", Tagging,
            "Controls permission to create or update tags that are attached to an AWS KMS key"
            => .resources(&[required("key")])
               .conditions(&["aws:RequestTag/${TagKey}", "aws:TagKeys", "kms:CallerAccount", "kms:ViaService"]);
        untag_resource: "UntagResource", Tagging,
            "Controls permission to delete tags that are attached to an AWS KMS key"
            => .resources(&[required("key")]).conditions(&["aws:TagKeys", "kms:CallerAccount", "kms:ViaService"]);
        update_alias: "UpdateAlias", Write,
            "Controls permission to associate an alias with a different AWS KMS key"
            => .resources(&[required("alias"), required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        update_custom_key_store: "UpdateCustomKeyStore", Write,
            "Controls permission to change the properties of a custom key store"
            => .conditions(&["kms:CallerAccount"]);
        update_key_description: "UpdateKeyDescription", Write,
            "Controls permission to delete or change the description of an AWS KMS key"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:ViaService"]);
        update_primary_region: "UpdatePrimaryRegion", Write,
            "Controls permission to update the primary key of a multi-Region key"
            => .resources(&[required("key")])
               .conditions(&["kms:CallerAccount", "kms:PrimaryRegion", "kms:ViaService"]);
        verify: "Verify", Write,
            "Controls permission to use the specified AWS KMS key to verify digital signatures"
            => .resources(&[required("key")])
               .conditions(&["kms:CallerAccount", "kms:MessageType", "kms:SigningAlgorithm", "kms:ViaService"]);
        verify_mac: "VerifyMac", Write,
            "Controls permission to use the AWS KMS key to verify message authentication codes"
            => .resources(&[required("key")]).conditions(&["kms:CallerAccount", "kms:MacAlgorithm", "kms:ViaService"]);
    }

    resources {
        on_alias: "alias", "arn:${Partition}:kms:${Region}:${Account}:alias/${Alias}"
            (alias: "Alias")
            [];
        on_key: "key", "arn:${Partition}:kms:${Region}:${Account}:key/${KeyId}"
            (key_id: "KeyId")
            [
                "aws:ResourceTag/${TagKey}",
                "kms:KeyOrigin",
                "kms:KeySpec",
                "kms:KeyUsage",
                "kms:MultiRegion",
                "kms:MultiRegionKeyType",
                "kms:ResourceAliases"
            ];
    }

    conditions {
        if_bypass_policy_lockout_safety_check: "kms:BypassPolicyLockoutSafetyCheck", Bool,
            "Filters access to the CreateKey and PutKeyPolicy operations based on the value of the BypassPolicyLockoutSafetyCheck parameter in the request";
        if_caller_account: "kms:CallerAccount", String,
            "Filters access to specified AWS KMS operations based on the AWS account ID of the caller";
        if_data_key_pair_spec: "kms:DataKeyPairSpec", String,
            "Filters access to the GenerateDataKeyPair and GenerateDataKeyPairWithoutPlaintext operations based on the value of the KeyPairSpec parameter in the request";
        if_encryption_algorithm: "kms:EncryptionAlgorithm", String,
            "Filters access to cryptographic operations based on the value of the encryption algorithm in the request";
        if_encryption_context_keys: "kms:EncryptionContextKeys", ArrayOfString,
            "Filters access to a symmetric AWS KMS key based on the encryption context in a cryptographic operation";
        if_expiration_model: "kms:ExpirationModel", String,
            "Filters access to the ImportKeyMaterial operation based on the value of the ExpirationModel parameter in the request";
        if_grant_constraint_type: "kms:GrantConstraintType", String,
            "Filters access to the CreateGrant operation based on the grant constraint in the request";
        if_grant_is_for_aws_resource: "kms:GrantIsForAWSResource", Bool,
            "Filters access to the CreateGrant operation when the request comes from a specified AWS service";
        if_grant_operations: "kms:GrantOperations", ArrayOfString,
            "Filters access to the CreateGrant operation based on the operations in the grant";
        if_grantee_principal: "kms:GranteePrincipal", String,
            "Filters access to the CreateGrant operation based on the grantee principal in the grant";
        if_key_agreement_algorithm: "kms:KeyAgreementAlgorithm", String,
            "Filters access to the DeriveSharedSecret operation based on the value of the KeyAgreementAlgorithm parameter in the request";
        if_key_origin: "kms:KeyOrigin", String,
            "Filters access to an API operation based on the Origin property of the AWS KMS key created by or used in the operation";
        if_key_spec: "kms:KeySpec", String,
            "Filters access to an API operation based on the KeySpec property of the AWS KMS key that is created by or used in the operation";
        if_key_usage: "kms:KeyUsage", String,
            "Filters access to an API operation based on the KeyUsage property of the AWS KMS key created by or used in the operation";
        if_mac_algorithm: "kms:MacAlgorithm", String,
            "Filters access to the GenerateMac and VerifyMac operations based on the MacAlgorithm parameter in the request";
        if_message_type: "kms:MessageType", String,
            "Filters access to the Sign and Verify operations based on the value of the MessageType parameter in the request";
        if_multi_region: "kms:MultiRegion", Bool,
            "Filters access to an API operation based on the MultiRegion property of the AWS KMS key created by or used in the operation";
        if_multi_region_key_type: "kms:MultiRegionKeyType", String,
            "Filters access to an API operation based on the MultiRegionKeyType property of the AWS KMS key created by or used in the operation";
        if_primary_region: "kms:PrimaryRegion", String,
            "Filters access to the UpdatePrimaryRegion operation based on the value of the PrimaryRegion parameter in the request";
        if_re_encrypt_on_same_key: "kms:ReEncryptOnSameKey", Bool,
            "Filters access to the ReEncrypt operation when it uses the same AWS KMS key that was used for the Encrypt operation";
        if_recipient_attestation_image_sha384: "kms:RecipientAttestation:ImageSha384", String,
            "Filters access to the API operations based on the image hash in the attestation document in the request";
        if_replica_region: "kms:ReplicaRegion", String,
            "Filters access to the ReplicateKey operation based on the value of the ReplicaRegion parameter in the request";
        if_request_alias: "kms:RequestAlias", String,
            "Filters access to cryptographic operations, DescribeKey, and GetPublicKey based on the alias in the request";
        if_resource_aliases: "kms:ResourceAliases", ArrayOfString,
            "Filters access to specified AWS KMS operations based on aliases associated with the AWS KMS key";
        if_retiring_principal: "kms:RetiringPrincipal", String,
            "Filters access to the CreateGrant operation based on the retiring principal in the grant";
        if_rotation_period_in_days: "kms:RotationPeriodInDays", Numeric,
            "Filters access to the EnableKeyRotation operation based on the value of the RotationPeriodInDays parameter in the request";
        if_schedule_key_deletion_pending_window_in_days: "kms:ScheduleKeyDeletionPendingWindowInDays", Numeric,
            "Filters access to the ScheduleKeyDeletion operation based on the value of the PendingWindowInDays parameter in the request";
        if_signing_algorithm: "kms:SigningAlgorithm", String,
            "Filters access to the Sign and Verify operations based on the signing algorithm in the request";
        if_valid_to: "kms:ValidTo", Date,
            "Filters access to the ImportKeyMaterial operation based on the value of the ValidTo parameter in the request";
        if_via_service: "kms:ViaService", String,
            "Filters access when a request made on the principal's behalf comes from a specified AWS service";
        if_wrapping_algorithm: "kms:WrappingAlgorithm", String,
            "Filters access to the GetParametersForImport operation based on the value of the WrappingAlgorithm parameter in the request";
        if_wrapping_key_spec: "kms:WrappingKeySpec", String,
            "Filters access to the GetParametersForImport operation based on the value of the WrappingKeySpec parameter in the request";
    }

    tagged_conditions {
        if_encryption_context(encryption_context_key): "kms:EncryptionContext/${EncryptionContextKey}", String,
            "Filters access to a symmetric AWS KMS key based on the encryption context in a cryptographic operation";
    }
}
