use js_sys::Float32Array;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

use crate::{Error, Mat4, Projection};

/// JavaScript wrapper for [`Mat4`]
#[wasm_bindgen(js_name = "Mat4")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsMat4 {
    inner: Mat4,
}

#[wasm_bindgen(js_class = "Mat4")]
impl JsMat4 {
    /// Creates an identity matrix
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsMat4 {
        Mat4::IDENTITY.into()
    }

    /// Creates a matrix from 16 column-major elements
    #[wasm_bindgen(js_name = "fromArray")]
    pub fn from_array(data: &[f32]) -> Result<JsMat4, JsValue> {
        Ok(Mat4::from_slice(data).map_err(to_js_error)?.into())
    }

    /// Creates a projection matrix from a `{ kind: ..., ... }` config object
    #[wasm_bindgen(js_name = "fromProjection")]
    pub fn from_projection(config: JsValue) -> Result<JsMat4, JsValue> {
        let projection: Projection = from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid projection config: {e}")))?;

        Ok(projection.to_matrix().map_err(to_js_error)?.into())
    }

    #[wasm_bindgen(js_name = "rotationX")]
    pub fn rotation_x(angle: f32) -> JsMat4 {
        Mat4::rotation_x(angle).into()
    }

    #[wasm_bindgen(js_name = "rotationY")]
    pub fn rotation_y(angle: f32) -> JsMat4 {
        Mat4::rotation_y(angle).into()
    }

    #[wasm_bindgen(js_name = "rotationZ")]
    pub fn rotation_z(angle: f32) -> JsMat4 {
        Mat4::rotation_z(angle).into()
    }

    #[wasm_bindgen]
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Result<JsMat4, JsValue> {
        Mat4::orthographic(left, right, bottom, top, z_near, z_far)
            .map(Into::into)
            .map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn perspective(
        fov_y: f32,
        aspect: f32,
        z_near: f32,
        z_far: f32,
    ) -> Result<JsMat4, JsValue> {
        Mat4::perspective(fov_y, aspect, z_near, z_far)
            .map(Into::into)
            .map_err(to_js_error)
    }

    /// Returns `this * right`
    #[wasm_bindgen]
    pub fn multiply(&self, right: &JsMat4) -> JsMat4 {
        (self.inner * right.inner).into()
    }

    #[wasm_bindgen]
    pub fn get(&self, index: usize) -> Result<f32, JsValue> {
        self.inner.get(index).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), JsValue> {
        self.inner.set(index, value).map_err(to_js_error)
    }

    /// Copies the column-major elements into a new `Float32Array`, ready for
    /// `uniformMatrix4fv`
    #[wasm_bindgen(js_name = "toArray")]
    pub fn to_array(&self) -> Float32Array {
        Float32Array::from(self.inner.as_slice())
    }
}

impl From<Mat4> for JsMat4 {
    fn from(inner: Mat4) -> Self {
        Self { inner }
    }
}

impl From<JsMat4> for Mat4 {
    fn from(mat: JsMat4) -> Self {
        mat.inner
    }
}

fn to_js_error(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
