use crate::errors::{PlonkError, Result};
use zksetup_algebra::prelude::*;

/// A variable of a constraint together with the coefficient it is scaled by.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Index into the witness vector.
    pub variable_id: usize,
    /// Index into the coefficient table.
    pub coeff_id: usize,
}

impl Term {
    /// Create a new term.
    pub fn new(variable_id: usize, coeff_id: usize) -> Self {
        Self {
            variable_id,
            coeff_id,
        }
    }
}

/// A sparse constraint `ql*l + qr*r + qm*l*r + qo*o + qk = 0`.
///
/// The multiplication selector is the product of the coefficients of the two
/// `m` terms, whose variables are those of `l` and `r`. `k` indexes the
/// constant in the coefficient table.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseR1C {
    /// Left wire.
    pub l: Term,
    /// Right wire.
    pub r: Term,
    /// Multiplication terms.
    pub m: [Term; 2],
    /// Output wire.
    pub o: Term,
    /// Constant.
    pub k: usize,
}

/// A finalized constraint system.
///
/// Variables are numbered public first, then secret, then internal. Every
/// public variable gets a placeholder row `-x_i + qk_i = 0` in front of the
/// constraints, which are followed by the assertions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseR1CS<F> {
    /// Number of public variables.
    pub nb_public_variables: usize,
    /// Number of secret variables.
    pub nb_secret_variables: usize,
    /// Number of internal variables.
    pub nb_internal_variables: usize,
    /// Coefficient table shared by all rows.
    pub coefficients: Vec<F>,
    /// Constraints.
    pub constraints: Vec<SparseR1C>,
    /// Assertions.
    pub assertions: Vec<SparseR1C>,
}

impl<F: Scalar> SparseR1CS<F> {
    /// Return the number of variables.
    pub fn nb_variables(&self) -> usize {
        self.nb_public_variables + self.nb_secret_variables + self.nb_internal_variables
    }

    /// Return the number of rows: placeholders, constraints and assertions.
    pub fn nb_rows(&self) -> usize {
        self.nb_public_variables + self.constraints.len() + self.assertions.len()
    }

    /// Iterate over constraints then assertions, in row order.
    pub fn rows(&self) -> impl Iterator<Item = &SparseR1C> {
        self.constraints.iter().chain(self.assertions.iter())
    }

    /// Check that every variable and coefficient reference is in range.
    pub fn validate(&self) -> Result<()> {
        let nb_variables = self.nb_variables();
        let nb_coefficients = self.coefficients.len();
        if nb_variables == 0 {
            return Err(PlonkError::ConstraintSystemError("no variables"));
        }

        for c in self.rows() {
            for t in [&c.l, &c.r, &c.o, &c.m[0], &c.m[1]] {
                if t.variable_id >= nb_variables {
                    return Err(PlonkError::ConstraintSystemError(
                        "variable id out of range",
                    ));
                }
                if t.coeff_id >= nb_coefficients {
                    return Err(PlonkError::ConstraintSystemError("coefficient id out of range"));
                }
            }
            if c.k >= nb_coefficients {
                return Err(PlonkError::ConstraintSystemError("coefficient id out of range"));
            }
            if c.m[0].variable_id != c.l.variable_id || c.m[1].variable_id != c.r.variable_id {
                return Err(PlonkError::ConstraintSystemError(
                    "multiplication terms must reuse the left and right wires",
                ));
            }
        }
        Ok(())
    }

    /// Check whether `witness` satisfies every constraint and assertion.
    /// Placeholder rows hold by construction once the public inputs are
    /// moved into the constant selector.
    pub fn is_satisfied(&self, witness: &[F]) -> Result<bool> {
        self.validate()?;
        if witness.len() != self.nb_variables() {
            return Err(PlonkError::ConstraintSystemError("witness length mismatch"));
        }

        let coef = |t: &Term| self.coefficients[t.coeff_id];
        Ok(self.rows().all(|c| {
            let l = witness[c.l.variable_id];
            let r = witness[c.r.variable_id];
            let o = witness[c.o.variable_id];
            let qm = coef(&c.m[0]).mul(&coef(&c.m[1]));

            let res = coef(&c.l)
                .mul(&l)
                .add(&coef(&c.r).mul(&r))
                .add(&qm.mul(&l).mul(&r))
                .add(&coef(&c.o).mul(&o))
                .add(&self.coefficients[c.k]);
            res.is_zero()
        }))
    }
}
