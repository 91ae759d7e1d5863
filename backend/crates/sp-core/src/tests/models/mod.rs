mod ids;
mod notification_type;
mod payloads;
