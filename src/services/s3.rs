use super::{optional, required};

/// Condition keys accepted by every S3 request.
const REQUEST_AUTH: &[&str] = &[
    "s3:authType",
    "s3:ResourceAccount",
    "s3:signatureAge",
    "s3:signatureversion",
    "s3:TlsVersion",
    "s3:x-amz-content-sha256",
];

const LIST_OBJECTS: &[&str] = &[
    "s3:authType",
    "s3:delimiter",
    "s3:max-keys",
    "s3:prefix",
    "s3:ResourceAccount",
    "s3:signatureAge",
    "s3:signatureversion",
    "s3:TlsVersion",
    "s3:x-amz-content-sha256",
];

const EXISTING_OBJECT: &[&str] = &[
    "s3:authType",
    "s3:ExistingObjectTag/${TagKey}",
    "s3:ResourceAccount",
    "s3:signatureAge",
    "s3:signatureversion",
    "s3:TlsVersion",
    "s3:versionid",
    "s3:x-amz-content-sha256",
];

const GRANTS: &[&str] = &[
    "s3:authType",
    "s3:ResourceAccount",
    "s3:signatureAge",
    "s3:signatureversion",
    "s3:TlsVersion",
    "s3:x-amz-acl",
    "s3:x-amz-content-sha256",
    "s3:x-amz-grant-full-control",
    "s3:x-amz-grant-read",
    "s3:x-amz-grant-read-acp",
    "s3:x-amz-grant-write",
    "s3:x-amz-grant-write-acp",
];

const JOB: &[&str] = &[
    "s3:authType",
    "s3:ExistingJobOperation",
    "s3:ExistingJobPriority",
    "s3:ResourceAccount",
    "s3:signatureAge",
    "s3:signatureversion",
    "s3:TlsVersion",
    "s3:x-amz-content-sha256",
];

service! {
    /// Statement builder for Amazon S3 (`s3`).
    ///
    /// Bucket and object ARNs carry neither region nor account; access point, job and Storage Lens ARNs do.
    pub struct S3;
    prefix: "s3",
    name: "Amazon S3",
    api_reference: "https://docs.aws.amazon.com/AmazonS3/latest/API/",
    complete: false,

    actions {
        abort_multipart_upload: "AbortMultipartUpload", Write,
            "Grants permission to abort a multipart upload"
            => .resources(&[required("object")]).conditions(REQUEST_AUTH);
        bypass_governance_retention: "BypassGovernanceRetention", PermissionsManagement,
            "Grants permission to allow circumvention of governance-mode object retention settings"
            => .resources(&[required("object")])
               .conditions(&[
                   "s3:authType",
                   "s3:object-lock-legal-hold",
                   "s3:object-lock-mode",
                   "s3:object-lock-remaining-retention-days",
                   "s3:object-lock-retain-until-date",
                   "s3:ResourceAccount",
                   "s3:TlsVersion",
               ]);
        create_access_point: "CreateAccessPoint", Write,
            "Grants permission to create a new access point"
            => .resources(&[required("accesspoint")])
               .conditions(&[
                   "s3:AccessPointNetworkOrigin",
                   "s3:authType",
                   "s3:DataAccessPointAccount",
                   "s3:DataAccessPointArn",
                   "s3:locationconstraint",
                   "s3:ResourceAccount",
                   "s3:TlsVersion",
               ]);
        create_bucket: "CreateBucket", Write,
            "Grants permission to create a new bucket"
            => .resources(&[required("bucket")])
               .conditions(&[
                   "aws:RequestTag/${TagKey}",
                   "aws:TagKeys",
                   "s3:authType",
                   "s3:locationconstraint",
                   "s3:TlsVersion",
                   "s3:x-amz-acl",
                   "s3:x-amz-grant-full-control",
                   "s3:x-amz-grant-read",
                   "s3:x-amz-grant-read-acp",
                   "s3:x-amz-grant-write",
                   "s3:x-amz-grant-write-acp",
               ]);
        create_job: "CreateJob", Write,
            "Grants permission to create a new Amazon S3 Batch Operations job"
            => .conditions(&[
                   "aws:RequestTag/${TagKey}",
                   "aws:TagKeys",
                   "s3:authType",
                   "s3:RequestJobOperation",
                   "s3:RequestJobPriority",
                   "s3:ResourceAccount",
                   "s3:TlsVersion",
               ])
               .dependent(&["iam:PassRole"]);
        create_multi_region_access_point: "CreateMultiRegionAccessPoint", Write,
            "Grants permission to create a new multi-region access point"
            => .resources(&[required("multiregionaccesspoint")]).conditions(REQUEST_AUTH);
        delete_access_point: "DeleteAccessPoint", Write,
            "Grants permission to delete the access point named in the URI"
            => .resources(&[required("accesspoint")]).conditions(REQUEST_AUTH);
        delete_access_point_policy: "DeleteAccessPointPolicy", PermissionsManagement,
            "Grants permission to delete the policy on a specified access point"
            => .resources(&[required("accesspoint")]).conditions(REQUEST_AUTH);
        delete_bucket: "DeleteBucket", Write,
            "Grants permission to delete the bucket named in the URI"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        delete_bucket_policy: "DeleteBucketPolicy", PermissionsManagement,
            "Grants permission to delete the policy on a specified bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        delete_bucket_website: "DeleteBucketWebsite", Write,
            "Grants permission to remove the website configuration for a bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        delete_job_tagging: "DeleteJobTagging", Tagging,
            "Grants permission to remove tags from an existing Amazon S3 Batch Operations job"
            => .resources(&[required("job")]).conditions(JOB);
        delete_object: "DeleteObject", Write,
            "Grants permission to remove the null version of an object and insert a delete marker"
            => .resources(&[required("object")]).conditions(REQUEST_AUTH);
        delete_object_tagging: "DeleteObjectTagging", Tagging,
            "Grants permission to use the tagging subresource to remove the entire tag set from the specified object"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        delete_object_version: "DeleteObjectVersion", Write,
            "Grants permission to remove a specific version of an object"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        delete_object_version_tagging: "DeleteObjectVersionTagging", Tagging,
            "Grants permission to remove the entire tag set for a specific version of the object"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        delete_storage_lens_configuration: "DeleteStorageLensConfiguration", Write,
            "Grants permission to delete an existing Amazon S3 Storage Lens configuration"
            => .resources(&[required("storagelensconfiguration")]).conditions(REQUEST_AUTH);
        describe_job: "DescribeJob", Read,
            "Grants permission to retrieve the configuration parameters and status for a batch operations job"
            => .resources(&[required("job")]).conditions(REQUEST_AUTH);
        describe_multi_region_access_point_operation: "DescribeMultiRegionAccessPointOperation", Read,
            "Grants permission to retrieve the configurations on a multi-region access point operation"
            => .conditions(REQUEST_AUTH);
        get_accelerate_configuration: "GetAccelerateConfiguration", Read,
            "Grants permission to use the accelerate subresource to return the Transfer Acceleration state of a bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        get_access_point: "GetAccessPoint", Read,
            "Grants permission to return configuration information about the specified access point"
            => .conditions(REQUEST_AUTH);
        get_access_point_policy: "GetAccessPointPolicy", Read,
            "Grants permission to return the access point policy associated with the specified access point"
            => .resources(&[required("accesspoint")]).conditions(REQUEST_AUTH);
        get_access_point_policy_status: "GetAccessPointPolicyStatus", Read,
            "Grants permission to return the policy status for a specific access point policy"
            => .resources(&[required("accesspoint")]).conditions(REQUEST_AUTH);
        get_account_public_access_block: "GetAccountPublicAccessBlock", Read,
            "Grants permission to retrieve the PublicAccessBlock configuration for an AWS account"
            => .conditions(REQUEST_AUTH);
        get_bucket_acl: "GetBucketAcl", Read,
            "Grants permission to use the acl subresource to return the access control list (ACL) of an Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        get_bucket_cors: "GetBucketCORS", Read,
            "Grants permission to return the CORS configuration information set for the bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        get_bucket_location: "GetBucketLocation", Read,
            "Grants permission to return the Region that an Amazon S3 bucket resides in"
            => .resources(&[required("bucket")]);
        get_bucket_logging: "GetBucketLogging", Read,
            "Grants permission to return the logging status of an Amazon S3 bucket and the permissions users have to view or modify that status"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        get_bucket_notification: "GetBucketNotification", Read,
            "Grants permission to get the notification configuration of an Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        get_bucket_object_lock_configuration: "GetBucketObjectLockConfiguration", Read,
            "Grants permission to get the Object Lock configuration of an Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        get_bucket_ownership_controls: "GetBucketOwnershipControls", Read,
            "Grants permission to retrieve ownership controls on a bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        get_bucket_policy: "GetBucketPolicy", Read,
            "Grants permission to return the policy of the specified bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        get_bucket_policy_status: "GetBucketPolicyStatus", Read,
            "Grants permission to retrieve the policy status for a specific Amazon S3 bucket, which indicates whether the bucket is public"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        get_bucket_public_access_block: "GetBucketPublicAccessBlock", Read,
            "Grants permission to retrieve the PublicAccessBlock configuration for an Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        get_bucket_tagging: "GetBucketTagging", Read,
            "Grants permission to return the tag set associated with an Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        get_bucket_versioning: "GetBucketVersioning", Read,
            "Grants permission to return the versioning state of an Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        get_bucket_website: "GetBucketWebsite", Read,
            "Grants permission to return the website configuration for an Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        get_encryption_configuration: "GetEncryptionConfiguration", Read,
            "Grants permission to return the default encryption configuration an Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        get_lifecycle_configuration: "GetLifecycleConfiguration", Read,
            "Grants permission to return the lifecycle configuration information set on an Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        get_object: "GetObject", Read,
            "Grants permission to retrieve objects from Amazon S3"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        get_object_acl: "GetObjectAcl", Read,
            "Grants permission to return the access control list (ACL) of an object"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        get_object_attributes: "GetObjectAttributes", Read,
            "Grants permission to retrieve attributes related to a specific object"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        get_object_legal_hold: "GetObjectLegalHold", Read,
            "Grants permission to get an object's current legal hold status"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        get_object_retention: "GetObjectRetention", Read,
            "Grants permission to retrieve the retention settings for an object"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        get_object_tagging: "GetObjectTagging", Read,
            "Grants permission to return the tag set of an object"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        get_object_torrent: "GetObjectTorrent", Read,
            "Grants permission to return torrent files from an Amazon S3 bucket"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        get_object_version: "GetObjectVersion", Read,
            "Grants permission to retrieve a specific version of an object"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        get_object_version_acl: "GetObjectVersionAcl", Read,
            "Grants permission to return the access control list (ACL) of a specific object version"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        get_object_version_attributes: "GetObjectVersionAttributes", Read,
            "Grants permission to retrieve attributes related to a specific version of an object"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        get_object_version_for_replication: "GetObjectVersionForReplication", Read,
            "Grants permission to replicate both unencrypted objects and objects encrypted with SSE-S3 or SSE-KMS"
            => .resources(&[required("object")]).conditions(REQUEST_AUTH);
        get_object_version_tagging: "GetObjectVersionTagging", Read,
            "Grants permission to return the tag set for a specific version of the object"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        get_object_version_torrent: "GetObjectVersionTorrent", Read,
            "Grants permission to get Torrent files about a different version using the versionId subresource"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        get_replication_configuration: "GetReplicationConfiguration", Read,
            "Grants permission to get the replication configuration information set on an Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        get_storage_lens_configuration: "GetStorageLensConfiguration", Read,
            "Grants permission to get an Amazon S3 Storage Lens configuration"
            => .resources(&[required("storagelensconfiguration")]).conditions(REQUEST_AUTH);
        list_access_points: "ListAccessPoints", List,
            "Grants permission to list access points"
            => .conditions(REQUEST_AUTH);
        list_all_my_buckets: "ListAllMyBuckets", List,
            "Grants permission to list all buckets owned by the authenticated sender of the request"
            => .conditions(REQUEST_AUTH);
        list_bucket: "ListBucket", List,
            "Grants permission to list some or all of the objects in an Amazon S3 bucket (up to 1000)"
            => .resources(&[required("bucket")]).conditions(LIST_OBJECTS);
        list_bucket_multipart_uploads: "ListBucketMultipartUploads", List,
            "Grants permission to list in-progress multipart uploads"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        list_bucket_versions: "ListBucketVersions", List,
            "Grants permission to list metadata about all the versions of objects in an Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(LIST_OBJECTS);
        list_jobs: "ListJobs", List,
            "Grants permission to list current jobs and jobs that have ended recently"
            => .conditions(REQUEST_AUTH);
        list_multipart_upload_parts: "ListMultipartUploadParts", List,
            "Grants permission to list the parts that have been uploaded for a specific multipart upload"
            => .resources(&[required("object")]).conditions(REQUEST_AUTH);
        list_storage_lens_configurations: "ListStorageLensConfigurations", List,
            "Grants permission to list Amazon S3 Storage Lens configurations"
            => .conditions(REQUEST_AUTH);
        put_accelerate_configuration: "PutAccelerateConfiguration", Write,
            "Grants permission to use the accelerate subresource to set the Transfer Acceleration state of an existing S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        put_access_point_policy: "PutAccessPointPolicy", PermissionsManagement,
            "Grants permission to associate an access policy with a specified access point"
            => .resources(&[required("accesspoint")]).conditions(REQUEST_AUTH);
        put_account_public_access_block: "PutAccountPublicAccessBlock", PermissionsManagement,
            "Grants permission to create or modify the PublicAccessBlock configuration for an AWS account"
            => .conditions(REQUEST_AUTH);
        put_bucket_acl: "PutBucketAcl", PermissionsManagement,
            "Grants permission to set the permissions on an existing bucket using access control lists (ACLs)"
            => .resources(&[required("bucket")]).conditions(GRANTS);
        put_bucket_cors: "PutBucketCORS", Write,
            "Grants permission to set the CORS configuration for an Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        put_bucket_logging: "PutBucketLogging", Write,
            "Grants permission to set the logging parameters for an Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        put_bucket_notification: "PutBucketNotification", Write,
            "Grants permission to receive notifications when certain events happen in an Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        put_bucket_object_lock_configuration: "PutBucketObjectLockConfiguration", Write,
            "Grants permission to put Object Lock configuration on a specific bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        put_bucket_ownership_controls: "PutBucketOwnershipControls", Write,
            "Grants permission to add, replace or delete ownership controls on a bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        put_bucket_policy: "PutBucketPolicy", PermissionsManagement,
            "Grants permission to add or replace a bucket policy on a bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        put_bucket_public_access_block: "PutBucketPublicAccessBlock", PermissionsManagement,
            "Grants permission to create or modify the PublicAccessBlock configuration for a specific Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        put_bucket_tagging: "PutBucketTagging", Tagging,
            "Grants permission to add a set of tags to an existing Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        put_bucket_versioning: "PutBucketVersioning", Write,
            "Grants permission to set the versioning state of an existing Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        put_bucket_website: "PutBucketWebsite", Write,
            "Grants permission to set the configuration of the website that is specified in the website subresource"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        put_encryption_configuration: "PutEncryptionConfiguration", Write,
            "Grants permission to set the encryption configuration for an Amazon S3 bucket"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        put_job_tagging: "PutJobTagging", Tagging,
            "Grants permission to replace tags on an existing Amazon S3 Batch Operations job"
            => .resources(&[required("job")]).conditions(JOB);
        put_lifecycle_configuration: "PutLifecycleConfiguration", Write,
            "Grants permission to create a new lifecycle configuration for the bucket or replace an existing lifecycle configuration"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH);
        put_object: "PutObject", Write,
            "Grants permission to add an object to a bucket"
            => .resources(&[required("object")])
               .conditions(&[
                   "s3:authType",
                   "s3:object-lock-legal-hold",
                   "s3:object-lock-mode",
                   "s3:object-lock-remaining-retention-days",
                   "s3:object-lock-retain-until-date",
                   "s3:RequestObjectTag/${TagKey}",
                   "s3:RequestObjectTagKeys",
                   "s3:ResourceAccount",
                   "s3:signatureAge",
                   "s3:signatureversion",
                   "s3:TlsVersion",
                   "s3:x-amz-acl",
                   "s3:x-amz-content-sha256",
                   "s3:x-amz-copy-source",
                   "s3:x-amz-grant-full-control",
                   "s3:x-amz-grant-read",
                   "s3:x-amz-grant-read-acp",
                   "s3:x-amz-grant-write",
                   "s3:x-amz-grant-write-acp",
                   "s3:x-amz-metadata-directive",
                   "s3:x-amz-server-side-encryption",
                   "s3:x-amz-server-side-encryption-aws-kms-key-id",
                   "s3:x-amz-storage-class",
                   "s3:x-amz-website-redirect-location",
               ]);
        put_object_acl: "PutObjectAcl", PermissionsManagement,
            "Grants permission to set the access control list (ACL) permissions for new or existing objects in an S3 bucket"
            => .resources(&[required("object")]).conditions(GRANTS);
        put_object_legal_hold: "PutObjectLegalHold", Write,
            "Grants permission to apply a legal hold configuration to the specified object"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        put_object_retention: "PutObjectRetention", Write,
            "Grants permission to place an object retention configuration on an object"
            => .resources(&[required("object")]).conditions(EXISTING_OBJECT);
        put_object_tagging: "PutObjectTagging", Tagging,
            "Grants permission to set the supplied tag-set to an object that already exists in a bucket"
            => .resources(&[required("object")])
               .conditions(&[
                   "s3:authType",
                   "s3:ExistingObjectTag/${TagKey}",
                   "s3:RequestObjectTag/${TagKey}",
                   "s3:RequestObjectTagKeys",
                   "s3:ResourceAccount",
                   "s3:TlsVersion",
               ]);
        put_object_version_acl: "PutObjectVersionAcl", PermissionsManagement,
            "Grants permission to use the acl subresource to set the access control list (ACL) of a specific version"
            => .resources(&[required("object")]).conditions(GRANTS);
        put_object_version_tagging: "PutObjectVersionTagging", Tagging,
            "Grants permission to set the supplied tag-set for a specific version of an object"
            => .resources(&[required("object")])
               .conditions(&[
                   "s3:authType",
                   "s3:ExistingObjectTag/${TagKey}",
                   "s3:RequestObjectTag/${TagKey}",
                   "s3:RequestObjectTagKeys",
                   "s3:ResourceAccount",
                   "s3:TlsVersion",
                   "s3:versionid",
               ]);
        put_replication_configuration: "PutReplicationConfiguration", Write,
            "Grants permission to create a new replication configuration or replace an existing one"
            => .resources(&[required("bucket")]).conditions(REQUEST_AUTH).dependent(&["iam:PassRole"]);
        put_storage_lens_configuration: "PutStorageLensConfiguration", Write,
            "Grants permission to create or update an Amazon S3 Storage Lens configuration"
            => .conditions(REQUEST_AUTH);
        replicate_object: "ReplicateObject", Write,
            "Grants permission to replicate both unencrypted objects and objects encrypted with SSE-S3 or SSE-KMS"
            => .resources(&[required("object")])
               .conditions(&[
                   "s3:authType",
                   "s3:ResourceAccount",
                   "s3:TlsVersion",
                   "s3:x-amz-server-side-encryption",
                   "s3:x-amz-server-side-encryption-aws-kms-key-id",
               ]);
        restore_object: "RestoreObject", Write,
            "Grants permission to restore an archived copy of an object back into Amazon S3"
            => .resources(&[required("object")]).conditions(REQUEST_AUTH);
        update_job_priority: "UpdateJobPriority", Write,
            "Grants permission to update the priority of an existing job"
            => .resources(&[required("job")])
               .conditions(&[
                   "s3:authType",
                   "s3:ExistingJobOperation",
                   "s3:ExistingJobPriority",
                   "s3:RequestJobPriority",
                   "s3:ResourceAccount",
                   "s3:TlsVersion",
               ]);
        update_job_status: "UpdateJobStatus", Write,
            "Grants permission to update the status for the specified job"
            => .resources(&[required("job")])
               .conditions(&[
                   "s3:authType",
                   "s3:ExistingJobOperation",
                   "s3:ExistingJobPriority",
                   "s3:JobSuspendedCause",
                   "s3:ResourceAccount",
                   "s3:TlsVersion",
               ]);
        write_get_object_response: "WriteGetObjectResponse", Write,
            "Grants permission to provide data for GetObject requests sent to S3 Object Lambda"
            => .resources(&[optional("objectlambdaaccesspoint")]).conditions(REQUEST_AUTH);
    }

    resources {
        on_accesspoint: "accesspoint", "arn:${Partition}:s3:${Region}:${Account}:accesspoint/${AccessPointName}"
            (access_point_name: "AccessPointName")
            [];
        on_bucket: "bucket", "arn:${Partition}:s3:::${BucketName}"
            (bucket_name: "BucketName")
            [];
        on_object: "object", "arn:${Partition}:s3:::${BucketName}/${ObjectName}"
            (bucket_name: "BucketName", object_name: "ObjectName")
            [];
        on_job: "job", "arn:${Partition}:s3:${Region}:${Account}:job/${JobId}"
            (job_id: "JobId")
            [];
        on_storagelensconfiguration: "storagelensconfiguration",
            "arn:${Partition}:s3:${Region}:${Account}:storage-lens/${ConfigId}"
            (config_id: "ConfigId")
            ["aws:ResourceTag/${TagKey}"];
        on_objectlambdaaccesspoint: "objectlambdaaccesspoint",
            "arn:${Partition}:s3-object-lambda:${Region}:${Account}:accesspoint/${AccessPointName}"
            (access_point_name: "AccessPointName")
            [];
        on_multiregionaccesspoint: "multiregionaccesspoint",
            "arn:${Partition}:s3::${Account}:accesspoint/${AccessPointAlias}"
            (access_point_alias: "AccessPointAlias")
            [];
    }

    conditions {
        if_access_point_network_origin: "s3:AccessPointNetworkOrigin", String,
            "Filters access by the network origin (Internet or VPC)";
        if_auth_type: "s3:authType", String,
            "Filters access by authentication method";
        if_data_access_point_account: "s3:DataAccessPointAccount", String,
            "Filters access by the AWS Account ID that owns the access point";
        if_data_access_point_arn: "s3:DataAccessPointArn", String,
            "Filters access by an access point Amazon Resource Name (ARN)";
        if_delimiter: "s3:delimiter", String,
            "Filters access by delimiter parameter";
        if_existing_job_operation: "s3:ExistingJobOperation", String,
            "Filters access to updating the job priority by operation";
        if_existing_job_priority: "s3:ExistingJobPriority", Numeric,
            "Filters access to cancelling existing jobs by priority range";
        if_job_suspended_cause: "s3:JobSuspendedCause", String,
            "Filters access to cancelling suspended jobs by a specific job suspended cause";
        if_locationconstraint: "s3:locationconstraint", String,
            "Filters access by a specific Region";
        if_max_keys: "s3:max-keys", Numeric,
            "Filters access by maximum number of keys returned in a ListBucket request";
        if_object_lock_legal_hold: "s3:object-lock-legal-hold", String,
            "Filters access by object legal hold status";
        if_object_lock_mode: "s3:object-lock-mode", String,
            "Filters access by object retention mode (COMPLIANCE or GOVERNANCE)";
        if_object_lock_remaining_retention_days: "s3:object-lock-remaining-retention-days", Numeric,
            "Filters access by remaining object retention days";
        if_object_lock_retain_until_date: "s3:object-lock-retain-until-date", Date,
            "Filters access by object retain-until date";
        if_prefix: "s3:prefix", String,
            "Filters access by key name prefix";
        if_request_job_operation: "s3:RequestJobOperation", String,
            "Filters access to creating jobs by operation";
        if_request_job_priority: "s3:RequestJobPriority", Numeric,
            "Filters access to creating new jobs by priority range";
        if_request_object_tag_keys: "s3:RequestObjectTagKeys", ArrayOfString,
            "Filters access by the tag keys and values to be added to objects";
        if_resource_account: "s3:ResourceAccount", String,
            "Filters access by the resource owner AWS account ID";
        if_signature_age: "s3:signatureAge", Numeric,
            "Filters access by the age in milliseconds of the request signature";
        if_signatureversion: "s3:signatureversion", String,
            "Filters access by the version of AWS Signature used on the request";
        if_tls_version: "s3:TlsVersion", Numeric,
            "Filters access by the TLS version used by the client";
        if_versionid: "s3:versionid", String,
            "Filters access by a specific object version";
        if_x_amz_acl: "s3:x-amz-acl", String,
            "Filters access by canned ACL in the request's x-amz-acl header";
        if_x_amz_content_sha256: "s3:x-amz-content-sha256", String,
            "Filters access to unsigned content in your bucket";
        if_x_amz_copy_source: "s3:x-amz-copy-source", String,
            "Filters access to requests with a specific bucket, prefix, or object as the copy source";
        if_x_amz_grant_full_control: "s3:x-amz-grant-full-control", String,
            "Filters access to requests with the x-amz-grant-full-control (full control) header";
        if_x_amz_grant_read: "s3:x-amz-grant-read", String,
            "Filters access to requests with the x-amz-grant-read (read access) header";
        if_x_amz_grant_read_acp: "s3:x-amz-grant-read-acp", String,
            "Filters access to requests with the x-amz-grant-read-acp (read permissions for the ACL) header";
        if_x_amz_grant_write: "s3:x-amz-grant-write", String,
            "Filters access to requests with the x-amz-grant-write (write access) header";
        if_x_amz_grant_write_acp: "s3:x-amz-grant-write-acp", String,
            "Filters access to requests with the x-amz-grant-write-acp (write permissions for the ACL) header";
        if_x_amz_metadata_directive: "s3:x-amz-metadata-directive", String,
            "Filters access by object metadata behavior (COPY or REPLACE) when objects are copied";
        if_x_amz_server_side_encryption: "s3:x-amz-server-side-encryption", String,
            "Filters access by server-side encryption";
        if_x_amz_server_side_encryption_aws_kms_key_id: "s3:x-amz-server-side-encryption-aws-kms-key-id", Arn,
            "Filters access by AWS KMS customer managed key for server-side encryption";
        if_x_amz_storage_class: "s3:x-amz-storage-class", String,
            "Filters access by storage class";
        if_x_amz_website_redirect_location: "s3:x-amz-website-redirect-location", String,
            "Filters access by a specific website redirect location for buckets that are configured as static websites";
    }

    tagged_conditions {
        if_existing_object_tag(tag_key): "s3:ExistingObjectTag/${TagKey}", String,
            "Filters access by existing object tag key and value";
        if_request_object_tag(tag_key): "s3:RequestObjectTag/${TagKey}", String,
            "Filters access by the tag keys and values to be added to objects";
    }
}
