//! Persistent form of scalars, vectors and matrices.
//!
//! Values are written as SI cells plus the display unit id; containers also
//! carry their storage tag. Reading resolves the unit id against the kind's
//! unit catalog and revalidates sparse structure.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Access, Matrix, Scalar, Vector};
use crate::core::{MatShape, Real};
use crate::error::UnitError;
use crate::kind::QuantityKind;
use crate::storage::{CsrMatrix, MatrixData, SparseVector, StorageType, VectorData};
use crate::unit::Unit;

fn resolve<K: QuantityKind>(id: &str) -> Result<Unit<K>, UnitError> {
    K::unit_by_id(id).ok_or_else(|| UnitError::UnknownUnit { kind: K::NAME, id: id.to_string() })
}

#[derive(Serialize, Deserialize)]
struct ScalarRepr<T> {
    si: T,
    unit: String,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "storage", rename_all = "SCREAMING_SNAKE_CASE")]
enum VectorRepr<T> {
    Dense {
        unit: String,
        si: Vec<T>,
    },
    Sparse {
        unit: String,
        size: usize,
        indices: Vec<usize>,
        values: Vec<T>,
    },
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "storage", rename_all = "SCREAMING_SNAKE_CASE")]
enum MatrixRepr<T> {
    Dense {
        unit: String,
        rows: Vec<Vec<T>>,
    },
    Sparse {
        unit: String,
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    },
}

impl<K: QuantityKind, T: Real> Serialize for Scalar<K, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ScalarRepr { si: self.si(), unit: self.unit().id().to_string() }.serialize(serializer)
    }
}

impl<'de, K: QuantityKind, T: Real> Deserialize<'de> for Scalar<K, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ScalarRepr::<T>::deserialize(deserializer)?;
        let unit = resolve::<K>(&repr.unit).map_err(D::Error::custom)?;
        Ok(Scalar::from_si(repr.si, unit))
    }
}

impl<K: QuantityKind, T: Real, M: Access> Serialize for Vector<K, T, M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let unit = self.unit().id().to_string();
        let repr = match self.data() {
            VectorData::Dense(v) => VectorRepr::Dense { unit, si: v.clone() },
            VectorData::Sparse(s) => VectorRepr::Sparse {
                unit,
                size: s.len(),
                indices: s.indices().to_vec(),
                values: s.values().to_vec(),
            },
        };
        repr.serialize(serializer)
    }
}

impl<'de, K: QuantityKind, T: Real, M: Access> Deserialize<'de> for Vector<K, T, M> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let decoded = match VectorRepr::<T>::deserialize(deserializer)? {
            VectorRepr::Dense { unit, si } => resolve::<K>(&unit)
                .and_then(|unit| Ok(Vector::wrap(VectorData::new(si, StorageType::Dense)?, unit))),
            VectorRepr::Sparse { unit, size, indices, values } => resolve::<K>(&unit).and_then(|unit| {
                if size == 0 {
                    return Err(UnitError::InvalidArgument("vector data is empty".to_string()));
                }
                let sparse = SparseVector::from_parts(size, indices, values)?;
                Ok(Vector::wrap(VectorData::Sparse(sparse), unit))
            }),
        };
        decoded.map_err(D::Error::custom)
    }
}

impl<K: QuantityKind, T: Real, M: Access> Serialize for Matrix<K, T, M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let unit = self.unit().id().to_string();
        let repr = match self.data() {
            MatrixData::Dense(_) => MatrixRepr::Dense { unit, rows: self.values_si() },
            MatrixData::Sparse(s) => MatrixRepr::Sparse {
                unit,
                nrows: s.nrows(),
                ncols: s.ncols(),
                row_ptr: s.row_ptr().to_vec(),
                col_idx: s.col_idx().to_vec(),
                values: s.values().to_vec(),
            },
        };
        repr.serialize(serializer)
    }
}

impl<'de, K: QuantityKind, T: Real, M: Access> Deserialize<'de> for Matrix<K, T, M> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let decoded = match MatrixRepr::<T>::deserialize(deserializer)? {
            MatrixRepr::Dense { unit, rows } => resolve::<K>(&unit)
                .and_then(|unit| Ok(Matrix::wrap(MatrixData::new(&rows, StorageType::Dense)?, unit))),
            MatrixRepr::Sparse { unit, nrows, ncols, row_ptr, col_idx, values } => {
                resolve::<K>(&unit).and_then(|unit| {
                    if nrows == 0 || ncols == 0 {
                        return Err(UnitError::InvalidArgument(format!(
                            "matrix data of size {nrows}x{ncols} is empty"
                        )));
                    }
                    let csr = CsrMatrix::from_csr(nrows, ncols, row_ptr, col_idx, values)?;
                    Ok(Matrix::wrap(MatrixData::Sparse(csr), unit))
                })
            }
        };
        decoded.map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::kind::{AbsoluteTemperature, Length};
    use crate::storage::StorageType;
    use crate::units::{length, temperature};
    use crate::value::{Matrix, MutableVector, Scalar, Vector};

    #[test]
    fn scalar_keeps_si_and_unit() {
        let t = Scalar::<AbsoluteTemperature>::new(20.0, temperature::DEGREE_CELSIUS_ABS);
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"unit\":\"°C\""), "{json}");
        let back: Scalar<AbsoluteTemperature> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert_eq!(back.unit(), temperature::DEGREE_CELSIUS_ABS);
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let err = serde_json::from_str::<Scalar<Length>>(r#"{"si":1.0,"unit":"parsec"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown unit"), "{err}");
    }

    #[test]
    fn sparse_vector_form() {
        let v = Vector::<Length>::new(&[0.0, 2.0, 0.0], length::KILOMETER, StorageType::Sparse).unwrap();
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["storage"], "SPARSE");
        assert_eq!(json["size"], 3);
        let back: MutableVector<Length> = serde_json::from_value(json).unwrap();
        assert_eq!(back, v);
        assert_eq!(back.storage_type(), StorageType::Sparse);
        let bad = r#"{"storage":"SPARSE","unit":"m","size":2,"indices":[1,0],"values":[1.0,2.0]}"#;
        assert!(serde_json::from_str::<Vector<Length>>(bad).is_err());
    }

    #[test]
    fn matrix_forms() {
        let rows = vec![vec![1.0, 0.0], vec![0.0, 4.0]];
        for storage in [StorageType::Dense, StorageType::Sparse] {
            let m = Matrix::<Length>::new(&rows, length::METER, storage).unwrap();
            let json = serde_json::to_string(&m).unwrap();
            let back: Matrix<Length> = serde_json::from_str(&json).unwrap();
            assert_eq!(back, m);
            assert_eq!(back.storage_type(), storage);
        }
        let jagged = r#"{"storage":"DENSE","unit":"m","rows":[[1.0],[1.0,2.0]]}"#;
        assert!(serde_json::from_str::<Matrix<Length>>(jagged).is_err());
    }
}
