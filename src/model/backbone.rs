//! Convolutional feature-extraction backbone
//!
//! A stack of convolutional blocks that maps an RGB image to a spatial
//! feature map. This plays the role of the pretrained network's body: its
//! weights can be restored from a checkpoint at startup while the
//! classification head stays freshly initialized.

use burn::{
    module::Module,
    nn::{
        conv::{Conv2d, Conv2dConfig},
        pool::{MaxPool2d, MaxPool2dConfig},
        PaddingConfig2d, Relu,
    },
    tensor::{backend::Backend, Tensor},
};

/// A convolutional block: Conv2d + ReLU + MaxPool
#[derive(Module, Debug)]
pub struct ConvBlock<B: Backend> {
    pub conv: Conv2d<B>,
    pub relu: Relu,
    pub pool: MaxPool2d,
}

impl<B: Backend> ConvBlock<B> {
    /// Create a new convolutional block
    pub fn new(in_channels: usize, out_channels: usize, device: &B::Device) -> Self {
        let conv = Conv2dConfig::new([in_channels, out_channels], [3, 3])
            .with_padding(PaddingConfig2d::Same)
            .init(device);
        let pool = MaxPool2dConfig::new([2, 2]).with_strides([2, 2]).init();

        Self {
            conv,
            relu: Relu::new(),
            pool,
        }
    }

    /// Forward pass through the block
    pub fn forward(&self, x: Tensor<B, 4>) -> Tensor<B, 4> {
        let x = self.conv.forward(x);
        let x = self.relu.forward(x);
        self.pool.forward(x)
    }
}

/// Feature-extraction backbone
///
/// Four convolutional blocks with doubling filter counts. Each block halves
/// the spatial resolution, so a 224x224 input yields a 14x14 feature map
/// with `base_filters * 8` channels.
#[derive(Module, Debug)]
pub struct Backbone<B: Backend> {
    pub block1: ConvBlock<B>,
    pub block2: ConvBlock<B>,
    pub block3: ConvBlock<B>,
    pub block4: ConvBlock<B>,
}

impl<B: Backend> Backbone<B> {
    /// Create a new backbone with randomly initialized weights
    pub fn new(in_channels: usize, base_filters: usize, device: &B::Device) -> Self {
        Self {
            block1: ConvBlock::new(in_channels, base_filters, device),
            block2: ConvBlock::new(base_filters, base_filters * 2, device),
            block3: ConvBlock::new(base_filters * 2, base_filters * 4, device),
            block4: ConvBlock::new(base_filters * 4, base_filters * 8, device),
        }
    }

    /// Forward pass: [N, C, H, W] -> [N, base_filters * 8, H/16, W/16]
    pub fn forward(&self, x: Tensor<B, 4>) -> Tensor<B, 4> {
        let x = self.block1.forward(x);
        let x = self.block2.forward(x);
        let x = self.block3.forward(x);
        self.block4.forward(x)
    }
}

/// Number of channels the backbone produces for a given base filter count
pub fn feature_dim(base_filters: usize) -> usize {
    base_filters * 8
}
