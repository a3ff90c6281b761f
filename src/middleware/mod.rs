/*
 * Responsibility
 * - Cross-cutting HTTP layers applied by the router (request id, limits, access log, recovery)
 */
pub mod http;
