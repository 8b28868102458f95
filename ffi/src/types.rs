//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use docstore_core::error::ApiError;
use docstore_core::http::HttpMethod;
use docstore_core::types::Record;

/// Opaque handle to a `RecordClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiRecordClient {
    pub(crate) inner: docstore_core::RecordClient,
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
            HttpMethod::Put => FfiHttpMethod::Put,
            HttpMethod::Delete => FfiHttpMethod::Delete,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `record_build_*` functions. The C caller executes the request
/// and passes the response back through `record_parse_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: docstore_core::HttpRequest) -> *mut Self {
        let path = CString::new(req.path).unwrap().into_raw();
        let body = match req.body {
            Some(b) => CString::new(b).unwrap().into_raw(),
            None => std::ptr::null_mut(),
        };

        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let mut ffi_headers: Vec<FfiHeader> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: CString::new(k).unwrap().into_raw(),
                    value: CString::new(v).unwrap().into_raw(),
                })
                .collect();
            let ptr = ffi_headers.as_mut_ptr();
            std::mem::forget(ffi_headers);
            ptr
        };

        let ffi_req = Box::new(FfiHttpRequest {
            method: req.method.into(),
            path,
            headers,
            headers_len,
            body,
        });
        Box::into_raw(ffi_req)
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing an HTTP request,
/// then passes a pointer to a `record_parse_*` function. The FFI layer reads
/// but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiRecordResult`.
#[repr(C)]
pub enum FfiErrorCode {
    Ok = 0,
    NotFound = 1,
    Conflict = 2,
    Server = 3,
    Network = 4,
    Deserialization = 5,
    Serialization = 6,
    Panic = 7,
    NullArg = 8,
}

/// Tag that tells `record_free_result` what `FfiRecordResult::data` points to.
#[repr(C)]
pub enum FfiDataTag {
    None = 0,
    Record = 1,
    RecordList = 2,
}

/// A single record exposed to C.
#[repr(C)]
pub struct FfiRecord {
    pub id: *mut c_char,
    pub name: *mut c_char,
    pub description: *mut c_char,
    pub etag: *mut c_char,
}

impl FfiRecord {
    fn from_core(record: Record) -> Self {
        FfiRecord {
            id: CString::new(record.id.to_string()).unwrap().into_raw(),
            name: CString::new(record.name).unwrap().into_raw(),
            description: CString::new(record.description).unwrap().into_raw(),
            etag: CString::new(record.etag).unwrap().into_raw(),
        }
    }
}

/// A list of records exposed to C.
#[repr(C)]
pub struct FfiRecordList {
    pub items: *mut FfiRecord,
    pub len: u32,
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the parsed payload (tagged by `data_tag`).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, and `data` is null.
#[repr(C)]
pub struct FfiRecordResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiRecordResult {
    /// Build a success result carrying a single `FfiRecord`.
    pub(crate) fn ok_record(record: Record) -> *mut Self {
        let ffi_record = Box::new(FfiRecord::from_core(record));
        let result = Box::new(FfiRecordResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::Record,
            data: Box::into_raw(ffi_record) as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build a success result carrying a `FfiRecordList`.
    pub(crate) fn ok_record_list(records: Vec<Record>) -> *mut Self {
        let len = records.len() as u32;
        let mut ffi_records: Vec<FfiRecord> =
            records.into_iter().map(FfiRecord::from_core).collect();

        let items = if ffi_records.is_empty() {
            std::ptr::null_mut()
        } else {
            let ptr = ffi_records.as_mut_ptr();
            std::mem::forget(ffi_records);
            ptr
        };

        let ffi_list = Box::new(FfiRecordList { items, len });
        let result = Box::new(FfiRecordResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::RecordList,
            data: Box::into_raw(ffi_list) as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build a success result with no data payload (e.g. delete).
    pub(crate) fn ok_empty() -> *mut Self {
        let result = Box::new(FfiRecordResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result from an `ApiError`.
    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        let (error_code, http_status, msg) = match &err {
            ApiError::NotFound => (FfiErrorCode::NotFound, 404u16, err.to_string()),
            ApiError::Conflict { .. } => (FfiErrorCode::Conflict, 409, err.to_string()),
            ApiError::Server { status, .. } => (FfiErrorCode::Server, *status, err.to_string()),
            ApiError::Network(_) => (FfiErrorCode::Network, 0, err.to_string()),
            ApiError::Deserialization(_) => (FfiErrorCode::Deserialization, 0, err.to_string()),
            ApiError::Serialization(_) => (FfiErrorCode::Serialization, 0, err.to_string()),
        };

        let result = Box::new(FfiRecordResult {
            error_code,
            error_message: CString::new(msg).unwrap().into_raw(),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        let msg = format!("null argument: {name}");
        let result = Box::new(FfiRecordResult {
            error_code: FfiErrorCode::NullArg,
            error_message: CString::new(msg).unwrap().into_raw(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        let result = Box::new(FfiRecordResult {
            error_code: FfiErrorCode::Panic,
            error_message: CString::new(msg).unwrap_or_default().into_raw(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }
}
