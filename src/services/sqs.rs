use super::{optional, required};

service! {
    /// Statement builder for Amazon SQS (`sqs`).
    pub struct Sqs;
    prefix: "sqs",
    name: "Amazon SQS",
    api_reference: "https://docs.aws.amazon.com/AWSSimpleQueueService/latest/APIReference/",
    complete: true,

    actions {
        add_permission: "AddPermission", PermissionsManagement,
            "Grants permission to add a permission to a queue for a specific principal"
            => .resources(&[required("queue")]);
        cancel_message_move_task: "CancelMessageMoveTask", Write,
            "Grants permission to cancel an in-progress message move task"
            => .resources(&[required("queue")]);
        change_message_visibility: "ChangeMessageVisibility", Write,
            "Grants permission to change the visibility timeout of a specified message in a queue to a new value"
            => .resources(&[required("queue")]);
        create_queue: "CreateQueue", Write,
            "Grants permission to create a new queue, or returns the URL of an existing one"
            => .resources(&[required("queue")]).conditions(&["aws:RequestTag/${TagKey}", "aws:TagKeys"]);
        delete_message: "DeleteMessage", Write,
            "Grants permission to delete the specified message from the specified queue"
            => .resources(&[required("queue")]);
        delete_queue: "DeleteQueue", Write,
            "Grants permission to delete the queue specified by the queue URL"
            => .resources(&[required("queue")]);
        get_queue_attributes: "GetQueueAttributes", Read,
            "Grants permission to get attributes for the specified queue"
            => .resources(&[required("queue")]);
        get_queue_url: "GetQueueUrl", Read,
            "Grants permission to return the URL of an existing queue"
            => .resources(&[required("queue")]);
        list_dead_letter_source_queues: "ListDeadLetterSourceQueues", Read,
            "Grants permission to return a list of your queues that have the RedrivePolicy queue attribute configured with a dead letter queue"
            => .resources(&[required("queue")]);
        list_message_move_tasks: "ListMessageMoveTasks", Read,
            "Grants permission to list the most recent message movement tasks on a specific source queue"
            => .resources(&[required("queue")]);
        list_queue_tags: "ListQueueTags", Read,
            "Grants permission to list tags added to an SQS queue"
            => .resources(&[required("queue")]);
        list_queues: "ListQueues", List,
            "Grants permission to return a list of your queues";
        purge_queue: "PurgeQueue", Write,
            "Grants permission to delete the messages in a queue specified by the queue URL"
            => .resources(&[required("queue")]);
        receive_message: "ReceiveMessage", Read,
            "Grants permission to retrieve one or more messages, with a maximum limit of 10 messages, from the specified queue"
            => .resources(&[required("queue")]);
        remove_permission: "RemovePermission", PermissionsManagement,
            "Grants permission to revoke any permissions in the queue policy that matches the specified Label parameter"
            => .resources(&[required("queue")]);
        send_message: "SendMessage", Write,
            "Grants permission to deliver a message to the specified queue"
            => .resources(&[required("queue")]);
        set_queue_attributes: "SetQueueAttributes", PermissionsManagement,
            "Grants permission to set the value of one or more queue attributes"
            => .resources(&[required("queue")]);
        start_message_move_task: "StartMessageMoveTask", Write,
            "Grants permission to start an asynchronous task to move messages from a specified source queue to a specified destination queue"
            => .resources(&[required("queue")]);
        tag_queue: "TagQueue", Tagging,
            "Grants permission to add tags to the specified SQS queue"
            => .resources(&[required("queue")]).conditions(&["aws:RequestTag/${TagKey}", "aws:TagKeys"]);
        untag_queue: "UntagQueue", Tagging,
            "Grants permission to remove tags from the specified SQS queue"
            => .resources(&[optional("queue")]).conditions(&["aws:TagKeys"]);
    }

    resources {
        on_queue: "queue", "arn:${Partition}:sqs:${Region}:${Account}:${QueueName}" (queue_name: "QueueName")
            ["aws:ResourceTag/${TagKey}"];
    }

    conditions {}

    tagged_conditions {}
}
