use ark_ff::PrimeField;
use ark_relations::{
    lc,
    r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError, Variable},
};

/// "I know `x` such that `x * x == y`", `y` public.
#[derive(Clone)]
pub struct SquareCircuit<F: PrimeField> {
    pub x: Option<F>,
    pub y: F,
}

impl<F: PrimeField> SquareCircuit<F> {
    pub fn empty() -> Self {
        Self {
            x: None,
            y: F::zero(),
        }
    }

    pub fn with_witness(x: F) -> Self {
        Self { x: Some(x), y: x * x }
    }
}

impl<F: PrimeField> ConstraintSynthesizer<F> for SquareCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        let y_var = cs.new_input_variable(|| Ok(self.y))?;
        let x_var = cs.new_witness_variable(|| self.x.ok_or(SynthesisError::AssignmentMissing))?;

        cs.enforce_constraint(lc!() + x_var, lc!() + x_var, lc!() + y_var)?;
        Ok(())
    }
}

/// One squaring per slot: public `ys[i] == xs[i]^2`. With zero slots the
/// circuit has no public inputs at all.
#[derive(Clone)]
pub struct SquaresCircuit<F: PrimeField> {
    pub xs: Vec<Option<F>>,
}

impl<F: PrimeField> SquaresCircuit<F> {
    pub fn empty(slots: usize) -> Self {
        Self {
            xs: vec![None; slots],
        }
    }

    pub fn with_witness(xs: &[F]) -> Self {
        Self {
            xs: xs.iter().copied().map(Some).collect(),
        }
    }

    pub fn public_inputs(xs: &[F]) -> Vec<F> {
        xs.iter().map(|x| *x * x).collect()
    }
}

impl<F: PrimeField> ConstraintSynthesizer<F> for SquaresCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        for x in &self.xs {
            let y_var = cs.new_input_variable(|| {
                let x = x.ok_or(SynthesisError::AssignmentMissing)?;
                Ok(x * x)
            })?;
            let x_var = cs.new_witness_variable(|| x.ok_or(SynthesisError::AssignmentMissing))?;
            cs.enforce_constraint(lc!() + x_var, lc!() + x_var, lc!() + y_var)?;
        }
        // Groth16 needs at least one constraint.
        let one = cs.new_witness_variable(|| Ok(F::one()))?;
        cs.enforce_constraint(lc!() + one, lc!() + Variable::One, lc!() + Variable::One)?;
        Ok(())
    }
}

/// Private values summing to a public total, the shape of a dynamic-sum
/// accounting circuit.
#[derive(Clone)]
pub struct SumCircuit<F: PrimeField> {
    pub values: Vec<Option<F>>,
    pub total: F,
}

impl<F: PrimeField> SumCircuit<F> {
    pub fn empty(slots: usize) -> Self {
        Self {
            values: vec![None; slots],
            total: F::zero(),
        }
    }

    pub fn with_witness(values: &[u64]) -> Self {
        let values: Vec<F> = values.iter().map(|v| F::from(*v)).collect();
        let total = values.iter().copied().sum();
        Self {
            values: values.into_iter().map(Some).collect(),
            total,
        }
    }
}

impl<F: PrimeField> ConstraintSynthesizer<F> for SumCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        let total_var = cs.new_input_variable(|| Ok(self.total))?;
        let mut sum = lc!();
        for value in &self.values {
            let v = cs.new_witness_variable(|| value.ok_or(SynthesisError::AssignmentMissing))?;
            sum = sum + v;
        }
        cs.enforce_constraint(sum, lc!() + Variable::One, lc!() + total_var)?;
        Ok(())
    }
}
