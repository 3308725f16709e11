/// Strong ETag for a fixed payload: `"<prefix>-<crc32 hex>"`.
pub fn content_etag(prefix: &str, body: &[u8]) -> String {
    let hash = crc32fast::hash(body);
    format!("\"{prefix}-{hash:08x}\"")
}
