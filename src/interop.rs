use bspline::nalgebra::{DMatrix, DVector};
use bspline::Vec2;
use js_sys::{Float64Array, Object, Reflect, Uint32Array};
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}
pub fn arr_u32(slice: &[u32]) -> Uint32Array {
    let arr = Uint32Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}
pub fn arr_f64(slice: &[f64]) -> Float64Array {
    let arr = Float64Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}

/// `[x0, y0, x1, y1, ...]` to points; `None` on odd length.
pub fn points_from_flat(xy: &[f64]) -> Option<Vec<Vec2>> {
    if xy.len() % 2 != 0 { return None; }
    Some(xy.chunks_exact(2).map(|c| Vec2::new(c[0], c[1])).collect())
}

pub fn flatten_points(pts: &[Vec2]) -> Vec<f64> {
    let mut out = Vec::with_capacity(pts.len() * 2);
    for p in pts { out.push(p.x); out.push(p.y); }
    out
}

// nalgebra stores column-major; JS callers index row * n + col
pub fn row_major(m: &DMatrix<f64>) -> Vec<f64> {
    m.transpose().as_slice().to_vec()
}

pub fn vector_values(v: &DVector<f64>) -> Vec<f64> { v.as_slice().to_vec() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_points_split_pairwise() {
        let pts = points_from_flat(&[0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(pts, vec![Vec2::new(0.0, 1.0), Vec2::new(2.0, 3.0)]);
        assert!(points_from_flat(&[0.0, 1.0, 2.0]).is_none());
        assert_eq!(points_from_flat(&[]).unwrap(), Vec::<Vec2>::new());
        assert_eq!(flatten_points(&pts), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn row_major_reads_across_rows() {
        let m = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(row_major(&m), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
