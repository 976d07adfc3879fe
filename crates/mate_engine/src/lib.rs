//! Mp3-Mate engine: conversion service client and background request execution.
mod client;
mod decode;
mod engine;
mod types;

pub use client::{ConversionService, ReqwestConversionService, ServiceSettings, DEFAULT_ENDPOINT};
pub use decode::decode_response;
pub use engine::EngineHandle;
pub use types::{ConversionError, EngineEvent, FailureKind, RequestId, VideoInfo};
