// End-to-end tests for the speech upload backend
//
// Each test starts the real router on an ephemeral port and a wiremock server
// standing in for both upstreams:
// - Google Text-to-Speech at /v1/text:synthesize
// - Supabase Storage at /storage/v1/object/...
//
// Nothing is shared between tests, so they run in parallel.

mod helpers;
mod test_cors;
