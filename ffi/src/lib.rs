//! C-ABI wrapper around `docstore-core`.
//!
//! # Overview
//! Exposes the full record CRUD API through `extern "C"` functions so a host
//! shell with a C FFI can build and parse HTTP requests/responses without
//! linking to Rust's networking stack or serde directly.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-operation `build_*` / `parse_*` mirrors the core API 1:1.
//! - A single `FfiRecordResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `record_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use docstore_core::http::HttpResponse;
use docstore_core::types::{CreateRecord, UpdateRecord};

use types::*;

/// Read a nullable C string into an owned Rust `Option<String>`.
///
/// # Safety
/// `ptr` must be null or point to a valid NUL-terminated string.
unsafe fn opt_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(
            unsafe { CStr::from_ptr(ptr) }
                .to_str()
                .unwrap_or("")
                .to_string(),
        )
    }
}

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `RecordClient` bound to `base_url`.
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `record_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn record_client_new(base_url: *const c_char) -> *mut FfiRecordClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let url = unsafe { CStr::from_ptr(base_url) }.to_str().unwrap_or("");
        let client = docstore_core::RecordClient::new(url);
        Box::into_raw(Box::new(FfiRecordClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a `RecordClient` created by `record_client_new`. Safe to call with
/// null.
#[unsafe(no_mangle)]
pub extern "C" fn record_client_free(client: *mut FfiRecordClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build an HTTP request for listing all records.
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `record_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn record_build_list_records(
    client: *const FfiRecordClient,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let req = client.inner.build_list_records();
        FfiHttpRequest::from_core(req)
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for fetching a single record by id.
///
/// Returns null if `client` or `id` is null, or if `id` is not a valid UUID.
#[unsafe(no_mangle)]
pub extern "C" fn record_build_get_record(
    client: *const FfiRecordClient,
    id: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || id.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let id_str = unsafe { CStr::from_ptr(id) }.to_str().unwrap_or("");
        let uuid = match uuid::Uuid::parse_str(id_str) {
            Ok(u) => u,
            Err(_) => return std::ptr::null_mut(),
        };
        let req = client.inner.build_get_record(uuid);
        FfiHttpRequest::from_core(req)
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for creating a new record.
///
/// `description` may be null (empty). `id` may be null (server assigns one)
/// or a UUID string to pin the identifier.
/// Returns null if `client` or `name` is null, if `id` is present but not a
/// valid UUID, or if serialization fails.
#[unsafe(no_mangle)]
pub extern "C" fn record_build_create_record(
    client: *const FfiRecordClient,
    name: *const c_char,
    description: *const c_char,
    id: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || name.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let name = unsafe { CStr::from_ptr(name) }
            .to_str()
            .unwrap_or("")
            .to_string();
        let description = unsafe { opt_string(description) }.unwrap_or_default();
        let id = match unsafe { opt_string(id) } {
            None => None,
            Some(raw) => match uuid::Uuid::parse_str(&raw) {
                Ok(u) => Some(u),
                Err(_) => return std::ptr::null_mut(),
            },
        };
        let input = CreateRecord {
            id,
            name,
            description,
        };
        match client.inner.build_create_record(&input) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for updating an existing record.
///
/// `name` and `description` may be null (skip that field). `if_match` may be
/// null (no precondition) or the etag of the revision the caller read.
/// Returns null if `client` or `id` is null, or if `id` is not a valid UUID.
#[unsafe(no_mangle)]
pub extern "C" fn record_build_update_record(
    client: *const FfiRecordClient,
    id: *const c_char,
    name: *const c_char,
    description: *const c_char,
    if_match: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || id.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let id_str = unsafe { CStr::from_ptr(id) }.to_str().unwrap_or("");
        let uuid = match uuid::Uuid::parse_str(id_str) {
            Ok(u) => u,
            Err(_) => return std::ptr::null_mut(),
        };
        let input = UpdateRecord {
            name: unsafe { opt_string(name) },
            description: unsafe { opt_string(description) },
        };
        let if_match = unsafe { opt_string(if_match) };
        match client
            .inner
            .build_update_record(uuid, &input, if_match.as_deref())
        {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for deleting a record by id.
///
/// Returns null if `client` or `id` is null, or if `id` is not a valid UUID.
#[unsafe(no_mangle)]
pub extern "C" fn record_build_delete_record(
    client: *const FfiRecordClient,
    id: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || id.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let id_str = unsafe { CStr::from_ptr(id) }.to_str().unwrap_or("");
        let uuid = match uuid::Uuid::parse_str(id_str) {
            Ok(u) => u,
            Err(_) => return std::ptr::null_mut(),
        };
        let req = client.inner.build_delete_record(uuid);
        FfiHttpRequest::from_core(req)
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null body is
/// treated as an empty string.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(resp.body) }
            .to_str()
            .unwrap_or("")
            .to_string()
    };
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body,
    }
}

/// Parse an HTTP response from a list-records request.
///
/// Returns a result with `data_tag = RecordList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn record_parse_list_records(
    client: *const FfiRecordClient,
    response: *const FfiHttpResponse,
) -> *mut FfiRecordResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiRecordResult::null_arg("client");
        }
        if response.is_null() {
            return FfiRecordResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let core_resp = ffi_response_to_core(resp);
        match client.inner.parse_list_records(core_resp) {
            Ok(records) => FfiRecordResult::ok_record_list(records),
            Err(e) => FfiRecordResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiRecordResult::panic("panic in record_parse_list_records"))
}

/// Parse an HTTP response from a get-record request.
///
/// Returns a result with `data_tag = Record` on success.
#[unsafe(no_mangle)]
pub extern "C" fn record_parse_get_record(
    client: *const FfiRecordClient,
    response: *const FfiHttpResponse,
) -> *mut FfiRecordResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiRecordResult::null_arg("client");
        }
        if response.is_null() {
            return FfiRecordResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let core_resp = ffi_response_to_core(resp);
        match client.inner.parse_get_record(core_resp) {
            Ok(record) => FfiRecordResult::ok_record(record),
            Err(e) => FfiRecordResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiRecordResult::panic("panic in record_parse_get_record"))
}

/// Parse an HTTP response from a create-record request.
///
/// Returns a result with `data_tag = Record` on success (status 201).
#[unsafe(no_mangle)]
pub extern "C" fn record_parse_create_record(
    client: *const FfiRecordClient,
    response: *const FfiHttpResponse,
) -> *mut FfiRecordResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiRecordResult::null_arg("client");
        }
        if response.is_null() {
            return FfiRecordResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let core_resp = ffi_response_to_core(resp);
        match client.inner.parse_create_record(core_resp) {
            Ok(record) => FfiRecordResult::ok_record(record),
            Err(e) => FfiRecordResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiRecordResult::panic("panic in record_parse_create_record"))
}

/// Parse an HTTP response from an update-record request.
///
/// Returns a result with `data_tag = Record` on success. A stale `If-Match`
/// precondition surfaces as `FfiErrorCode::Conflict`.
#[unsafe(no_mangle)]
pub extern "C" fn record_parse_update_record(
    client: *const FfiRecordClient,
    response: *const FfiHttpResponse,
) -> *mut FfiRecordResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiRecordResult::null_arg("client");
        }
        if response.is_null() {
            return FfiRecordResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let core_resp = ffi_response_to_core(resp);
        match client.inner.parse_update_record(core_resp) {
            Ok(record) => FfiRecordResult::ok_record(record),
            Err(e) => FfiRecordResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiRecordResult::panic("panic in record_parse_update_record"))
}

/// Parse an HTTP response from a delete-record request.
///
/// Returns a result with `data_tag = None` on success (status 204).
#[unsafe(no_mangle)]
pub extern "C" fn record_parse_delete_record(
    client: *const FfiRecordClient,
    response: *const FfiHttpResponse,
) -> *mut FfiRecordResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiRecordResult::null_arg("client");
        }
        if response.is_null() {
            return FfiRecordResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let core_resp = ffi_response_to_core(resp);
        match client.inner.parse_delete_record(core_resp) {
            Ok(()) => FfiRecordResult::ok_empty(),
            Err(e) => FfiRecordResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiRecordResult::panic("panic in record_parse_delete_record"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by any `record_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn record_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        if !req.path.is_null() {
            drop(unsafe { CString::from_raw(req.path) });
        }
        if !req.body.is_null() {
            drop(unsafe { CString::from_raw(req.body) });
        }
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Vec::from_raw_parts(req.headers, req.headers_len as usize, req.headers_len as usize)
            };
            for h in headers {
                if !h.key.is_null() {
                    drop(unsafe { CString::from_raw(h.key) });
                }
                if !h.value.is_null() {
                    drop(unsafe { CString::from_raw(h.value) });
                }
            }
        }
    });
}

/// Free an `FfiRecordResult` returned by any `record_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points
/// to.
#[unsafe(no_mangle)]
pub extern "C" fn record_free_result(result: *mut FfiRecordResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.data.is_null() {
            match result.data_tag {
                FfiDataTag::Record => {
                    let record = unsafe { Box::from_raw(result.data as *mut FfiRecord) };
                    free_ffi_record_fields(&record);
                }
                FfiDataTag::RecordList => {
                    let list = unsafe { Box::from_raw(result.data as *mut FfiRecordList) };
                    if !list.items.is_null() && list.len > 0 {
                        let items = unsafe {
                            Vec::from_raw_parts(
                                list.items,
                                list.len as usize,
                                list.len as usize,
                            )
                        };
                        for item in &items {
                            free_ffi_record_fields(item);
                        }
                    }
                }
                FfiDataTag::None => {}
            }
        }
    });
}

/// Free the C-string fields of an `FfiRecord` (but not the struct itself).
fn free_ffi_record_fields(record: &FfiRecord) {
    if !record.id.is_null() {
        drop(unsafe { CString::from_raw(record.id) });
    }
    if !record.name.is_null() {
        drop(unsafe { CString::from_raw(record.name) });
    }
    if !record.description.is_null() {
        drop(unsafe { CString::from_raw(record.description) });
    }
    if !record.etag.is_null() {
        drop(unsafe { CString::from_raw(record.etag) });
    }
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn record_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
