pub mod anchor;

pub mod decayerror;

pub mod manager {
    pub mod managererror;
    pub mod decaymodelmanager;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod linearfunction;
        pub mod exponentialdecaycurve;
        pub mod logisticdecaycurve;
        pub mod piecewiselineardecaycurve;
    }
}

pub mod model {
    pub mod constantratedecay;
    pub mod decaymodel;
}
