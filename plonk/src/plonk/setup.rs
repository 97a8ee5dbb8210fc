use crate::errors::{PlonkError, Result};
use crate::plonk::{
    constraint_system::SparseR1CS,
    domain::Radix2Domain,
    lde::{compute_lde, to_canonical},
    permutation::build_permutation,
};
use crate::poly_commit::{field_polynomial::FpPolynomial, pcs::PolyComScheme};
use ark_std::{end_timer, start_timer};
use std::sync::Arc;
use zksetup_algebra::{prelude::*, traits::Domain};

/// The size factor of the domain the quotient polynomial is computed on.
pub const QUOTIENT_FACTOR: usize = 4;

/// PLONK verifier parameters.
///
/// The reference string is not serialized: call [`VerifyingKey::init_kzg`]
/// after deserializing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct VerifyingKey<PCS: PolyComScheme> {
    /// The size of the evaluation domain.
    pub size: usize,
    /// `1 / size`.
    pub size_inv: PCS::Field,
    /// The generator of the evaluation domain.
    pub generator: PCS::Field,
    /// The number of public variables.
    pub nb_public_variables: usize,
    /// The shifters `[u, u^2]` spanning the cosets of the output and right lanes.
    pub shifter: [PCS::Field; 2],
    /// The commitment scheme parameters.
    #[serde(skip)]
    pub srs: Option<Arc<PCS>>,
    /// The commitments of `S1`, `S2`, `S3`.
    pub s: [PCS::Commitment; 3],
    /// The commitment of the left selector, `-1` on placeholder rows.
    pub ql: PCS::Commitment,
    /// The commitment of the right selector.
    pub qr: PCS::Commitment,
    /// The commitment of the multiplication selector.
    pub qm: PCS::Commitment,
    /// The commitment of the output selector.
    pub qo: PCS::Commitment,
    /// The commitment of the constant selector, without the public inputs.
    pub qk: PCS::Commitment,
}

/// PLONK prover parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ProvingKey<PCS: PolyComScheme> {
    /// The verifier parameters.
    pub vk: Arc<VerifyingKey<PCS>>,
    /// The left selector in canonical form.
    pub ql: FpPolynomial<PCS::Field>,
    /// The right selector in canonical form.
    pub qr: FpPolynomial<PCS::Field>,
    /// The multiplication selector in canonical form.
    pub qm: FpPolynomial<PCS::Field>,
    /// The output selector in canonical form.
    pub qo: FpPolynomial<PCS::Field>,
    /// The constant selector in canonical form, zero on placeholder rows.
    pub cqk: FpPolynomial<PCS::Field>,
    /// The constant selector in Lagrange form. The prover writes the public
    /// inputs on the placeholder rows.
    pub lqk: Vec<PCS::Field>,
    /// The evaluation domain.
    pub domain_num: Radix2Domain<PCS::Field>,
    /// The domain for the quotient polynomial, `None` when the field has no
    /// radix-2 subgroup that large.
    pub domain_h: Option<Radix2Domain<PCS::Field>>,
    /// `S1`, `S2`, `S3` in Lagrange form.
    pub ls: [Vec<PCS::Field>; 3],
    /// `S1`, `S2`, `S3` in canonical form.
    pub cs: [FpPolynomial<PCS::Field>; 3],
    /// The copy-constraint permutation over `3 * size` positions.
    pub permutation: Vec<usize>,
}

impl<PCS: PolyComScheme> VerifyingKey<PCS> {
    /// Attach the commitment scheme parameters.
    pub fn init_kzg(&mut self, srs: Arc<PCS>) -> Result<()> {
        if srs.nb_coefficients() < self.size {
            return Err(PlonkError::SrsTooSmall);
        }
        self.srs = Some(srs);
        Ok(())
    }

    /// Return the expected number of public inputs.
    pub fn size_public_witness(&self) -> usize {
        self.nb_public_variables
    }

    /// Commit with the attached parameters.
    pub fn commit(&self, polynomial: &FpPolynomial<PCS::Field>) -> Result<PCS::Commitment> {
        let srs = self.srs.as_ref().ok_or(PlonkError::MissingSrs)?;
        Ok(srs.commit(polynomial)?)
    }
}

impl<PCS: PolyComScheme + Clone> ProvingKey<PCS> {
    /// Attach the commitment scheme parameters to the verifier parameters.
    /// A verifying key still shared with another owner is copied first.
    pub fn init_kzg(&mut self, srs: Arc<PCS>) -> Result<()> {
        Arc::make_mut(&mut self.vk).init_kzg(srs)
    }
}

impl<PCS: PolyComScheme> ProvingKey<PCS> {
    /// Return the verifier parameters.
    pub fn verifying_key(&self) -> Arc<VerifyingKey<PCS>> {
        self.vk.clone()
    }
}

/// The domain of size `QUOTIENT_FACTOR * n` a prover evaluates the quotient
/// polynomial on. Setup does not need it, so a missing subgroup is not an error.
pub fn quotient_domain<F: Domain>(n: usize) -> Option<Radix2Domain<F>> {
    let size = n.checked_mul(QUOTIENT_FACTOR)?;
    Radix2Domain::new(size)
        .ok()
        .filter(|domain| domain.cardinality == size)
}

/// Selector values by row: placeholders, then constraints, then assertions.
struct Selectors<F> {
    ql: Vec<F>,
    qr: Vec<F>,
    qm: Vec<F>,
    qo: Vec<F>,
    qk: Vec<F>,
}

fn compute_selectors<F: Scalar>(cs: &SparseR1CS<F>, n: usize) -> Selectors<F> {
    let mut sel = Selectors {
        ql: vec![F::zero(); n],
        qr: vec![F::zero(); n],
        qm: vec![F::zero(); n],
        qo: vec![F::zero(); n],
        qk: vec![F::zero(); n],
    };

    // -x_i + qk_i = 0, qk_i is completed by the prover.
    for ql in sel.ql.iter_mut().take(cs.nb_public_variables) {
        *ql = F::one().neg();
    }

    let coef = |id: usize| cs.coefficients[id];
    let offset = cs.nb_public_variables;
    for (i, c) in cs.rows().enumerate() {
        let row = offset + i;
        sel.ql[row] = coef(c.l.coeff_id);
        sel.qr[row] = coef(c.r.coeff_id);
        sel.qm[row] = coef(c.m[0].coeff_id).mul(&coef(c.m[1].coeff_id));
        sel.qo[row] = coef(c.o.coeff_id);
        sel.qk[row] = coef(c.k);
    }
    sel
}

/// Run the PLONK setup: build the selector and permutation polynomials of
/// `cs` and commit to them with `srs`.
pub fn setup<PCS: PolyComScheme>(
    cs: &SparseR1CS<PCS::Field>,
    srs: Arc<PCS>,
) -> Result<(ProvingKey<PCS>, Arc<VerifyingKey<PCS>>)> {
    let setup_time = start_timer!(|| "plonk setup");
    cs.validate()?;

    let domain_time = start_timer!(|| "domains");
    let size_system = cs.nb_rows();
    let domain_num = Radix2Domain::<PCS::Field>::new(size_system)?;
    let n = domain_num.cardinality;
    let domain_h = quotient_domain::<PCS::Field>(n);
    end_timer!(domain_time);

    let u = domain_num.finer_generator;
    let mut vk = VerifyingKey {
        size: n,
        size_inv: domain_num.cardinality_inv,
        generator: domain_num.generator,
        nb_public_variables: cs.nb_public_variables,
        shifter: [u, u.square()],
        srs: None,
        s: Default::default(),
        ql: Default::default(),
        qr: Default::default(),
        qm: Default::default(),
        qo: Default::default(),
        qk: Default::default(),
    };
    vk.init_kzg(srs)?;

    let selectors_time = start_timer!(|| "selector polynomials");
    let sel = compute_selectors(cs, n);
    let ql = to_canonical(&domain_num, &sel.ql);
    let qr = to_canonical(&domain_num, &sel.qr);
    let qm = to_canonical(&domain_num, &sel.qm);
    let qo = to_canonical(&domain_num, &sel.qo);
    let cqk = to_canonical(&domain_num, &sel.qk);
    end_timer!(selectors_time);

    let permutation_time = start_timer!(|| "permutation");
    let permutation = build_permutation(cs, n);
    let (ls, cs_polys) = compute_lde(&domain_num, &vk.shifter, &permutation);
    end_timer!(permutation_time);

    let commit_time = start_timer!(|| "commitments");
    vk.ql = vk.commit(&ql)?;
    vk.qr = vk.commit(&qr)?;
    vk.qm = vk.commit(&qm)?;
    vk.qo = vk.commit(&qo)?;
    vk.qk = vk.commit(&cqk)?;
    vk.s = [
        vk.commit(&cs_polys[0])?,
        vk.commit(&cs_polys[1])?,
        vk.commit(&cs_polys[2])?,
    ];
    end_timer!(commit_time);

    let vk = Arc::new(vk);
    let pk = ProvingKey {
        vk: vk.clone(),
        ql,
        qr,
        qm,
        qo,
        cqk,
        lqk: sel.qk,
        domain_num,
        domain_h,
        ls,
        cs: cs_polys,
        permutation,
    };

    end_timer!(setup_time);
    Ok((pk, vk))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::plonk::constraint_system::{SparseR1C, Term};
    use crate::poly_commit::kzg_poly_com::KZGCommitmentSchemeBN254;
    use zksetup_algebra::bn254::BN254Scalar;

    type F = BN254Scalar;

    // x0 public, x1 secret, x2 internal: x1 * x1 = x2, x2 + 3 = x0.
    fn small_cs() -> SparseR1CS<F> {
        SparseR1CS {
            nb_public_variables: 1,
            nb_secret_variables: 1,
            nb_internal_variables: 1,
            coefficients: vec![F::zero(), F::one(), F::one().neg(), F::from(3u32)],
            constraints: vec![SparseR1C {
                l: Term::new(1, 0),
                r: Term::new(1, 0),
                m: [Term::new(1, 1), Term::new(1, 1)],
                o: Term::new(2, 2),
                k: 0,
            }],
            assertions: vec![SparseR1C {
                l: Term::new(2, 1),
                r: Term::new(0, 2),
                m: [Term::new(2, 0), Term::new(0, 0)],
                o: Term::new(0, 0),
                k: 3,
            }],
        }
    }

    #[test]
    fn test_selectors() {
        let sel = compute_selectors(&small_cs(), 4);
        assert_eq!(sel.ql, vec![F::one().neg(), F::zero(), F::one(), F::zero()]);
        assert_eq!(sel.qr, vec![F::zero(), F::zero(), F::one().neg(), F::zero()]);
        assert_eq!(sel.qm, vec![F::zero(), F::one(), F::zero(), F::zero()]);
        assert_eq!(sel.qo, vec![F::zero(), F::one().neg(), F::zero(), F::zero()]);
        assert_eq!(sel.qk, vec![F::zero(), F::zero(), F::from(3u32), F::zero()]);
    }

    #[test]
    fn test_quotient_domain_at_two_adicity() {
        // BN254 has radix-2 subgroups up to 2^28.
        let domain = quotient_domain::<F>(1 << 26).unwrap();
        assert_eq!(domain.cardinality, 1 << 28);
        assert!(Radix2Domain::<F>::new(1 << 27).is_ok());
        assert!(quotient_domain::<F>(1 << 27).is_none());
        assert!(quotient_domain::<F>(usize::MAX).is_none());
        assert_eq!(quotient_domain::<F>(8).unwrap().cardinality, 32);
    }

    #[test]
    fn test_srs_too_small() {
        let mut prng = test_rng();
        let srs = Arc::new(KZGCommitmentSchemeBN254::new(2, &mut prng));
        let res = setup(&small_cs(), srs);
        assert_eq!(res.err(), Some(PlonkError::SrsTooSmall));
        assert_eq!(PlonkError::SrsTooSmall.to_string(), "kzg srs is too small");
    }

    #[test]
    fn test_empty_srs_is_too_small() {
        let mut prng = test_rng();
        let srs = Arc::new(KZGCommitmentSchemeBN254::new(4, &mut prng));
        let (_, vk) = setup(&small_cs(), srs).unwrap();

        let empty = Arc::new(KZGCommitmentSchemeBN254 {
            public_parameter_group_1: vec![],
            public_parameter_group_2: vec![],
        });
        let mut vk = (*vk).clone();
        assert_eq!(vk.init_kzg(empty.clone()), Err(PlonkError::SrsTooSmall));
        assert_eq!(setup(&small_cs(), empty).err(), Some(PlonkError::SrsTooSmall));
    }

    #[test]
    fn test_invalid_constraint_system() {
        let mut prng = test_rng();
        let srs = Arc::new(KZGCommitmentSchemeBN254::new(8, &mut prng));
        let mut cs = small_cs();
        cs.assertions[0].k = 9;
        assert!(matches!(
            setup(&cs, srs).err(),
            Some(PlonkError::ConstraintSystemError(_))
        ));
    }

    #[test]
    fn test_init_kzg_after_deserialization() {
        let mut prng = test_rng();
        let srs = Arc::new(KZGCommitmentSchemeBN254::new(4, &mut prng));
        let (pk, vk) = setup(&small_cs(), srs.clone()).unwrap();
        assert_eq!(vk.size, 4);
        assert_eq!(vk.size_public_witness(), 1);
        assert!(Arc::ptr_eq(&pk.verifying_key(), &vk));

        let bytes = bincode::serialize(&pk).unwrap();
        let mut pk2: ProvingKey<KZGCommitmentSchemeBN254> = bincode::deserialize(&bytes).unwrap();
        assert!(pk2.vk.srs.is_none());
        assert_eq!(pk2.vk.commit(&pk2.ql), Err(PlonkError::MissingSrs));

        let small = Arc::new(KZGCommitmentSchemeBN254::new(1, &mut prng));
        assert_eq!(pk2.init_kzg(small), Err(PlonkError::SrsTooSmall));
        pk2.init_kzg(srs).unwrap();
        assert_eq!(pk2.vk.commit(&pk2.ql).unwrap(), vk.ql);
    }
}
