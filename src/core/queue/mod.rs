pub mod fifo_queue_item;
pub mod queue_item;
